//! Error types shared by dictionary resolution and name supply.
//!
//! Filter compilation is total and has no error type.

use std::path::PathBuf;

/// Raised while configuring, i.e. the moment user input is structurally validated.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// A string that claims to be a URL could not be parsed.
    #[error("malformed dictionary URL {input:?}: {source}")]
    MalformedUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
    /// A path that cannot be expressed as a `file:` URL (e.g. still relative
    /// after joining with the base directory).
    #[error("dictionary path cannot be converted to a URL: {}", path.display())]
    UnrepresentablePath { path: PathBuf },
}

/// Raised by a name supply on first read, never at configuration time.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// Only local `file:` dictionaries can be streamed.
    #[error("unsupported dictionary URL scheme {scheme:?} in {url}")]
    UnsupportedScheme { scheme: String, url: String },
    /// Opening or reading the word list failed.
    #[error("read dictionary {url}: {source}")]
    Io {
        url: String,
        #[source]
        source: std::io::Error,
    },
    /// A full pass over the word list produced no valid identifier.
    #[error("dictionary {url} contains no usable names")]
    NoUsableNames { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_url_display_includes_input() {
        let source = url::Url::parse("file://[oops").unwrap_err();
        let err = ConfigurationError::MalformedUrl {
            input: "file://[oops".to_string(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("file://[oops"), "{msg}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn no_usable_names_display() {
        let err = DictionaryError::NoUsableNames {
            url: "file:///tmp/empty.txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "dictionary file:///tmp/empty.txt contains no usable names"
        );
    }
}
