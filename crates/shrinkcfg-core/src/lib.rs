pub mod config;
pub mod logging;

pub mod configuration;
pub mod dictionary;
pub mod error;
pub mod filter;

pub use configuration::{Configuration, FilterOption};
pub use dictionary::{Dictionaries, DictionaryKind, DictionaryReference, DictionarySource};
pub use error::{ConfigurationError, DictionaryError};
pub use filter::{compile_filter, compile_patterns, CompiledPattern, FilterList, Segment};
