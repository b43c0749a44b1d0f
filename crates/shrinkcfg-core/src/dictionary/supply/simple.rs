//! Built-in naming strategy used when no dictionary is configured.

use super::NameSupply;
use crate::error::DictionaryError;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Yields `a`..`z`, `aa`, `ab`, ... (bijective base 26).
#[derive(Debug, Clone, Default)]
pub struct SimpleNameSupply {
    index: u64,
}

impl SimpleNameSupply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name at position `index` (zero-based).
    pub fn name_at(index: u64) -> String {
        let base = ALPHABET.len() as u64;
        let mut n = index + 1;
        let mut out = Vec::new();
        while n > 0 {
            n -= 1;
            out.push(ALPHABET[(n % base) as usize]);
            n /= base;
        }
        out.reverse();
        // ALPHABET is ASCII.
        out.into_iter().map(char::from).collect()
    }
}

impl NameSupply for SimpleNameSupply {
    fn next_name(&mut self) -> Result<String, DictionaryError> {
        let name = Self::name_at(self.index);
        self.index += 1;
        Ok(name)
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}
