//! The configuration holder consumed by the bytecode engine.
//!
//! One owned [`FilterList`] per filter option and one [`Dictionaries`] set;
//! nothing is shared between instances.

pub mod file;

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::dictionary::{Dictionaries, DictionaryKind, DictionaryReference, DictionarySource};
use crate::error::ConfigurationError;
use crate::filter::FilterList;

pub use file::{load_task_file, TaskFile};

/// Filter-valued options of a shrinker task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOption {
    Keep,
    Warn,
    Note,
    AssumeNoSideEffects,
    AdaptClassStrings,
}

impl FilterOption {
    pub const ALL: [FilterOption; 5] = [
        FilterOption::Keep,
        FilterOption::Warn,
        FilterOption::Note,
        FilterOption::AssumeNoSideEffects,
        FilterOption::AdaptClassStrings,
    ];

    /// Name of the task method that configures this option.
    pub fn option_name(self) -> &'static str {
        match self {
            FilterOption::Keep => "keep",
            FilterOption::Warn => "dontwarn",
            FilterOption::Note => "dontnote",
            FilterOption::AssumeNoSideEffects => "assumenosideeffects",
            FilterOption::AdaptClassStrings => "adaptclassstrings",
        }
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.option_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    #[serde(skip)]
    base_dir: PathBuf,
    keep: FilterList,
    warn: FilterList,
    note: FilterList,
    assume_no_side_effects: FilterList,
    adapt_class_strings: FilterList,
    dictionaries: Dictionaries,
}

impl Configuration {
    /// Empty configuration; relative dictionary paths resolve against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            keep: FilterList::Absent,
            warn: FilterList::Absent,
            note: FilterList::Absent,
            assume_no_side_effects: FilterList::Absent,
            adapt_class_strings: FilterList::Absent,
            dictionaries: Dictionaries::default(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn filter(&self, option: FilterOption) -> &FilterList {
        match option {
            FilterOption::Keep => &self.keep,
            FilterOption::Warn => &self.warn,
            FilterOption::Note => &self.note,
            FilterOption::AssumeNoSideEffects => &self.assume_no_side_effects,
            FilterOption::AdaptClassStrings => &self.adapt_class_strings,
        }
    }

    pub fn filter_mut(&mut self, option: FilterOption) -> &mut FilterList {
        match option {
            FilterOption::Keep => &mut self.keep,
            FilterOption::Warn => &mut self.warn,
            FilterOption::Note => &mut self.note,
            FilterOption::AssumeNoSideEffects => &mut self.assume_no_side_effects,
            FilterOption::AdaptClassStrings => &mut self.adapt_class_strings,
        }
    }

    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    pub fn dictionaries_mut(&mut self) -> &mut Dictionaries {
        &mut self.dictionaries
    }

    /// Resolves `source` against the base directory and replaces the `kind` slot.
    pub fn set_dictionary(
        &mut self,
        kind: DictionaryKind,
        source: impl Into<DictionarySource>,
    ) -> Result<&DictionaryReference, ConfigurationError> {
        self.dictionaries.set(kind, source, &self.base_dir)
    }
}

#[cfg(test)]
mod tests;
