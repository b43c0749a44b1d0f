//! Streams of candidate identifiers for renaming.

mod simple;
mod words;

pub use simple::SimpleNameSupply;
pub use words::DictionaryNameSupply;

use super::DictionaryReference;
use crate::error::DictionaryError;

/// A deterministic, restartable, never-ending source of candidate names.
pub trait NameSupply {
    /// The next candidate. Wraps around instead of running out.
    fn next_name(&mut self) -> Result<String, DictionaryError>;

    /// Restarts the sequence from its first name.
    fn reset(&mut self);
}

/// Dictionary-backed supply when a reference is configured, the built-in
/// strategy otherwise.
pub fn name_supply_for(reference: Option<&DictionaryReference>) -> Box<dyn NameSupply> {
    match reference {
        Some(r) => Box::new(DictionaryNameSupply::new(r.clone())),
        None => Box::new(SimpleNameSupply::new()),
    }
}

/// Collects the next `count` names from `supply`.
pub fn take_names(supply: &mut dyn NameSupply, count: usize) -> Result<Vec<String>, DictionaryError> {
    (0..count).map(|_| supply.next_name()).collect()
}
