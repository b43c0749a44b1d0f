//! Class/member name filters.
//!
//! Turns dotted, comma-separated, optionally negated and wildcarded name
//! expressions (`com.example.**,!org.test.*`) into an ordered list of compiled
//! patterns in internal (slash) form, and keeps the absent / present
//! distinction every filter option relies on.

mod list;
mod pattern;
mod segment;

pub use list::{compile_filter, FilterList};
pub use pattern::{compile_patterns, to_internal_name, CompiledPattern};
pub use segment::Segment;

/// Separator between entries of a filter string.
pub const LIST_SEPARATOR: char = ',';
/// Prefix marking a negated entry.
pub const NEGATION_PREFIX: char = '!';
/// Package separator in external (source) notation.
pub const EXTERNAL_SEPARATOR: char = '.';
/// Package separator in internal notation.
pub const INTERNAL_SEPARATOR: char = '/';
