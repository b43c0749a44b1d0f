//! Word-list backed name supply.

use std::fs::File;
use std::io::{BufRead, BufReader};

use super::NameSupply;
use crate::dictionary::DictionaryReference;
use crate::error::DictionaryError;

const COMMENT_PREFIX: char = '#';
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Reads one candidate per line from a `file:` dictionary, lazily.
///
/// Blank lines, `#` comments, lines that are not valid UTF-8 and lines that
/// are not identifiers are skipped. A leading byte-order mark is ignored. When the file is exhausted it is reopened and read again from the
/// top, so the sequence never ends unless the file has no usable line.
pub struct DictionaryNameSupply {
    reference: DictionaryReference,
    reader: Option<BufReader<File>>,
    line: Vec<u8>,
    lines_this_pass: usize,
    yielded_this_pass: usize,
}

impl DictionaryNameSupply {
    pub fn new(reference: DictionaryReference) -> Self {
        Self {
            reference,
            reader: None,
            line: Vec::new(),
            lines_this_pass: 0,
            yielded_this_pass: 0,
        }
    }

    pub fn reference(&self) -> &DictionaryReference {
        &self.reference
    }

    fn open(&self) -> Result<BufReader<File>, DictionaryError> {
        let url = self.reference.url();
        if url.scheme() != "file" {
            return Err(DictionaryError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
                url: url.to_string(),
            });
        }
        let path = url
            .to_file_path()
            .map_err(|()| DictionaryError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
                url: url.to_string(),
            })?;
        let file = File::open(&path).map_err(|source| self.io_error(source))?;
        tracing::debug!(path = %path.display(), "opened dictionary");
        Ok(BufReader::new(file))
    }

    fn io_error(&self, source: std::io::Error) -> DictionaryError {
        DictionaryError::Io {
            url: self.reference.to_string(),
            source,
        }
    }
}

impl NameSupply for DictionaryNameSupply {
    fn next_name(&mut self) -> Result<String, DictionaryError> {
        loop {
            if self.reader.is_none() {
                self.reader = Some(self.open()?);
            }
            let Some(reader) = self.reader.as_mut() else {
                continue;
            };
            self.line.clear();
            let read = reader
                .read_until(b'\n', &mut self.line)
                .map_err(|source| DictionaryError::Io {
                    url: self.reference.to_string(),
                    source,
                })?;

            if read == 0 {
                if self.yielded_this_pass == 0 {
                    self.reset();
                    return Err(DictionaryError::NoUsableNames {
                        url: self.reference.to_string(),
                    });
                }
                tracing::debug!(
                    dictionary = %self.reference,
                    names = self.yielded_this_pass,
                    "dictionary exhausted, restarting from the top"
                );
                self.reset();
                continue;
            }

            self.lines_this_pass += 1;
            let Ok(text) = std::str::from_utf8(&self.line) else {
                tracing::debug!(
                    dictionary = %self.reference,
                    line = self.lines_this_pass,
                    "skipping dictionary line that is not valid UTF-8"
                );
                continue;
            };
            let text = if self.lines_this_pass == 1 {
                text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
            } else {
                text
            };

            let word = text.trim();
            if word.is_empty() || word.starts_with(COMMENT_PREFIX) {
                continue;
            }
            if !is_identifier(word) {
                tracing::debug!(word, "skipping dictionary entry that is not an identifier");
                continue;
            }
            self.yielded_this_pass += 1;
            return Ok(word.to_string());
        }
    }

    fn reset(&mut self) {
        self.reader = None;
        self.lines_this_pass = 0;
        self.yielded_this_pass = 0;
    }
}

/// First char alphabetic, `_` or `$`; the rest alphanumeric, `_` or `$`.
fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
