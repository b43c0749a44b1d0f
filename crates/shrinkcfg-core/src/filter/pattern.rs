//! Compiled form of one name expression.

use serde::Serialize;
use std::fmt;

use super::segment::Segment;
use super::{EXTERNAL_SEPARATOR, INTERNAL_SEPARATOR, LIST_SEPARATOR, NEGATION_PREFIX};

/// One compiled entry of a filter list.
///
/// The segments never contain `.`: the external dotted form is converted to
/// the internal slash form before segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CompiledPattern {
    pub negated: bool,
    pub segments: Vec<Segment>,
}

impl CompiledPattern {
    /// Compiles a single, already trimmed piece of a filter string.
    ///
    /// `!` is only recognised at position 0. The empty piece yields a
    /// zero-segment pattern that matches the empty name.
    pub fn compile(piece: &str) -> Self {
        let (negated, body) = match piece.strip_prefix(NEGATION_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, piece),
        };

        let internal = to_internal_name(body);
        let segments = if internal.is_empty() {
            Vec::new()
        } else {
            internal.split(INTERNAL_SEPARATOR).map(Segment::parse).collect()
        };

        Self { negated, segments }
    }

    /// Pattern text in internal notation, without the negation marker.
    pub fn internal_form(&self) -> String {
        let parts: Vec<&str> = self.segments.iter().map(Segment::as_str).collect();
        parts.join("/")
    }

    /// True if `internal_name` (slash form) matches this pattern, ignoring negation.
    pub fn matches(&self, internal_name: &str) -> bool {
        let names: Vec<&str> = if internal_name.is_empty() {
            Vec::new()
        } else {
            internal_name.split(INTERNAL_SEPARATOR).collect()
        };
        match_segments(&self.segments, &names)
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{}", NEGATION_PREFIX)?;
        }
        write!(f, "{}", self.internal_form())
    }
}

/// Splits a raw filter string on commas and compiles every trimmed piece, in order.
///
/// Empty pieces (doubled or trailing commas) are kept as zero-segment patterns.
pub fn compile_patterns(raw: &str) -> Vec<CompiledPattern> {
    raw.split(LIST_SEPARATOR)
        .map(|piece| CompiledPattern::compile(piece.trim()))
        .collect()
}

/// Converts an external (dotted) class name to internal (slash) form.
pub fn to_internal_name(external: &str) -> String {
    external.replace(EXTERNAL_SEPARATOR, "/")
}

/// Bottom-up over pattern suffixes: `row[j]` is true when the current
/// pattern suffix matches `names[j..]`. Linear in pattern length times name
/// length, however many `**` the pattern holds.
fn match_segments(patterns: &[Segment], names: &[&str]) -> bool {
    let n = names.len();
    let mut row: Vec<bool> = (0..=n).map(|j| j == n).collect();

    for segment in patterns.iter().rev() {
        let mut next = vec![false; n + 1];
        for j in (0..=n).rev() {
            next[j] = match segment {
                Segment::AnyDepth => row[j] || (j < n && next[j + 1]),
                _ => j < n && segment.matches_one(names[j]) && row[j + 1],
            };
        }
        row = next;
    }

    row[0]
}
