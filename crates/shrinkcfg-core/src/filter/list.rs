//! Accumulating filter lists with an explicit "never configured" state.

use serde::Serialize;

use super::pattern::{compile_patterns, CompiledPattern};

/// Ordered patterns backing one filter option.
///
/// `Absent` means the option was never configured. `Present(vec![])` means it
/// was explicitly cleared, which matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "patterns", rename_all = "lowercase")]
pub enum FilterList {
    #[default]
    Absent,
    Present(Vec<CompiledPattern>),
}

impl FilterList {
    /// Replaces the list with the present, empty sequence, whatever it held.
    pub fn clear(&mut self) {
        *self = FilterList::Present(Vec::new());
    }

    /// Appends the compiled entries of `raw`.
    ///
    /// A blank `raw` on an absent list only initialises it; on a present list
    /// it appends a zero-segment entry like any other empty piece.
    pub fn add_pattern(&mut self, raw: &str) {
        if raw.trim().is_empty() && self.is_absent() {
            self.clear();
            return;
        }

        let compiled = compile_patterns(raw);
        tracing::debug!(raw, count = compiled.len(), "compiled filter");
        match self {
            FilterList::Present(patterns) => patterns.extend(compiled),
            FilterList::Absent => *self = FilterList::Present(compiled),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FilterList::Absent)
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// The compiled patterns, or `None` if the option was never configured.
    pub fn patterns(&self) -> Option<&[CompiledPattern]> {
        match self {
            FilterList::Absent => None,
            FilterList::Present(patterns) => Some(patterns),
        }
    }

    /// Evaluates the list against an internal (slash form) name.
    ///
    /// Returns `None` when absent. A present empty list accepts everything.
    /// Otherwise the first matching entry decides; if none matches, a list
    /// ending in a negated entry accepts and any other list rejects.
    pub fn accepts(&self, internal_name: &str) -> Option<bool> {
        let patterns = self.patterns()?;
        let Some(last) = patterns.last() else {
            return Some(true);
        };

        let decision = patterns
            .iter()
            .find(|p| p.matches(internal_name))
            .map(|p| !p.negated)
            .unwrap_or(last.negated);
        Some(decision)
    }
}

/// Applies one configuring call to `existing`: `None` clears, `Some` appends.
pub fn compile_filter(existing: FilterList, raw: Option<&str>) -> FilterList {
    let mut list = existing;
    match raw {
        None => list.clear(),
        Some(raw) => list.add_pattern(raw),
    }
    list
}
