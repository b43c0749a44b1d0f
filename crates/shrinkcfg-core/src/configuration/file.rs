//! TOML task files: the calling layer between user input and the holder.
//!
//! ```toml
//! keep = ["com.example.api.**"]
//! dontwarn = ["com.example.*", "!org.test.Internal, org.test.*"]
//! dontnote = []                       # no-argument call: match everything
//! obfuscationdictionary = "dict/words.txt"
//! ```
//!
//! Every element of a filter array is one configuring call, applied in order.
//! An empty array is a single call without argument. A missing key leaves the
//! option unset.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{Configuration, FilterOption};
use crate::dictionary::DictionaryKind;
use crate::filter::compile_filter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskFile {
    #[serde(default)]
    pub keep: Option<Vec<String>>,
    #[serde(default)]
    pub dontwarn: Option<Vec<String>>,
    #[serde(default)]
    pub dontnote: Option<Vec<String>>,
    #[serde(default)]
    pub assumenosideeffects: Option<Vec<String>>,
    #[serde(default)]
    pub adaptclassstrings: Option<Vec<String>>,
    #[serde(default)]
    pub obfuscationdictionary: Option<String>,
    #[serde(default)]
    pub classobfuscationdictionary: Option<String>,
    #[serde(default)]
    pub packageobfuscationdictionary: Option<String>,
}

impl TaskFile {
    pub fn parse(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    fn calls(&self, option: FilterOption) -> Option<&[String]> {
        let calls = match option {
            FilterOption::Keep => &self.keep,
            FilterOption::Warn => &self.dontwarn,
            FilterOption::Note => &self.dontnote,
            FilterOption::AssumeNoSideEffects => &self.assumenosideeffects,
            FilterOption::AdaptClassStrings => &self.adaptclassstrings,
        };
        calls.as_deref()
    }

    fn dictionary(&self, kind: DictionaryKind) -> Option<&str> {
        let reference = match kind {
            DictionaryKind::General => &self.obfuscationdictionary,
            DictionaryKind::Class => &self.classobfuscationdictionary,
            DictionaryKind::Package => &self.packageobfuscationdictionary,
        };
        reference.as_deref()
    }

    /// Replays the file's calls onto `cfg`.
    pub fn apply(&self, cfg: &mut Configuration) -> Result<()> {
        for option in FilterOption::ALL {
            let Some(calls) = self.calls(option) else {
                continue;
            };
            let list = cfg.filter_mut(option);
            if calls.is_empty() {
                *list = compile_filter(std::mem::take(list), None);
            }
            for raw in calls {
                *list = compile_filter(std::mem::take(list), Some(raw));
            }
        }

        for kind in DictionaryKind::ALL {
            if let Some(reference) = self.dictionary(kind) {
                cfg.set_dictionary(kind, reference)
                    .with_context(|| format!("{}: {reference}", kind.option_name()))?;
            }
        }
        Ok(())
    }
}

/// Loads a task file; relative dictionary paths resolve against its directory.
pub fn load_task_file(path: &Path) -> Result<Configuration> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read task file: {}", path.display()))?;
    let task = TaskFile::parse(&data)
        .with_context(|| format!("parse task file: {}", path.display()))?;

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("resolve current directory")?
            .join(path)
    };
    let base_dir = absolute.parent().unwrap_or(Path::new("/")).to_path_buf();

    let mut cfg = Configuration::new(base_dir);
    task.apply(&mut cfg)?;
    tracing::info!("loaded task file {}", path.display());
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterList;

    fn texts(cfg: &Configuration, option: FilterOption) -> Vec<String> {
        cfg.filter(option)
            .patterns()
            .unwrap()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn missing_keys_stay_absent() {
        let task = TaskFile::parse("keep = [\"a.B\"]").unwrap();
        let mut cfg = Configuration::new("/project");
        task.apply(&mut cfg).unwrap();
        assert_eq!(texts(&cfg, FilterOption::Keep), vec!["a/B"]);
        assert!(cfg.filter(FilterOption::Warn).is_absent());
        assert!(cfg.filter(FilterOption::Note).is_absent());
    }

    #[test]
    fn empty_array_is_a_clearing_call() {
        let task = TaskFile::parse("dontnote = []\nadaptclassstrings = []").unwrap();
        let mut cfg = Configuration::new("/project");
        cfg.filter_mut(FilterOption::Note).add_pattern("x.Y");
        task.apply(&mut cfg).unwrap();
        assert_eq!(cfg.filter(FilterOption::Note), &FilterList::Present(Vec::new()));
        assert_eq!(
            cfg.filter(FilterOption::AdaptClassStrings),
            &FilterList::Present(Vec::new())
        );
    }

    #[test]
    fn elements_accumulate_in_order() {
        let task = TaskFile::parse(
            r#"dontwarn = ["com.example.**", "!org.test.Internal, org.test.*"]"#,
        )
        .unwrap();
        let mut cfg = Configuration::new("/project");
        task.apply(&mut cfg).unwrap();
        assert_eq!(
            texts(&cfg, FilterOption::Warn),
            vec!["com/example/**", "!org/test/Internal", "org/test/*"]
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(TaskFile::parse("dontwarnn = []").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn dictionaries_resolve_against_base_dir() {
        let task = TaskFile::parse(
            r#"
            classobfuscationdictionary = "dict/classes.txt"
            packageobfuscationdictionary = "file:///abs/packages.txt"
            "#,
        )
        .unwrap();
        let mut cfg = Configuration::new("/project");
        task.apply(&mut cfg).unwrap();
        let d = cfg.dictionaries();
        assert!(d.get(DictionaryKind::General).is_none());
        assert_eq!(
            d.get(DictionaryKind::Class).unwrap().as_str(),
            "file:///project/dict/classes.txt"
        );
        assert_eq!(
            d.get(DictionaryKind::Package).unwrap().as_str(),
            "file:///abs/packages.txt"
        );
    }

    #[test]
    fn malformed_dictionary_url_fails_apply() {
        let task = TaskFile::parse(r#"obfuscationdictionary = "http://[bad""#).unwrap();
        let mut cfg = Configuration::new("/project");
        let err = task.apply(&mut cfg).unwrap_err();
        assert!(format!("{err:#}").contains("obfuscationdictionary"));
    }
}
