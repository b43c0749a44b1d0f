//! Resolving user-supplied dictionary locations to URLs.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use url::Url;

use crate::error::ConfigurationError;

/// Schemes that make a string reference a URL rather than a path.
const URL_SCHEMES: &[&str] = &["file", "http", "https", "jar"];

/// What the caller handed us: a native path, free text, or a parsed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Path(PathBuf),
    Text(String),
    Url(Url),
}

impl From<PathBuf> for DictionarySource {
    fn from(p: PathBuf) -> Self {
        DictionarySource::Path(p)
    }
}

impl From<&Path> for DictionarySource {
    fn from(p: &Path) -> Self {
        DictionarySource::Path(p.to_path_buf())
    }
}

impl From<String> for DictionarySource {
    fn from(s: String) -> Self {
        DictionarySource::Text(s)
    }
}

impl From<&str> for DictionarySource {
    fn from(s: &str) -> Self {
        DictionarySource::Text(s.to_string())
    }
}

impl From<Url> for DictionarySource {
    fn from(u: Url) -> Self {
        DictionarySource::Url(u)
    }
}

/// A resolved word list location.
///
/// Resolution never touches the file system: the referenced file may not
/// exist yet, and any problem with it surfaces when names are first read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryReference {
    url: Url,
}

impl DictionaryReference {
    /// Resolves `source`, interpreting relative paths against `base_dir`.
    pub fn resolve(
        source: impl Into<DictionarySource>,
        base_dir: &Path,
    ) -> Result<Self, ConfigurationError> {
        let url = match source.into() {
            DictionarySource::Url(url) => url,
            DictionarySource::Text(text) if has_url_scheme(&text) => {
                Url::parse(&text).map_err(|source| ConfigurationError::MalformedUrl {
                    input: text.clone(),
                    source,
                })?
            }
            DictionarySource::Text(text) => file_url(Path::new(&text), base_dir)?,
            DictionarySource::Path(path) => file_url(&path, base_dir)?,
        };
        tracing::debug!(%url, "resolved dictionary reference");
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for DictionaryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

impl Serialize for DictionaryReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.url.as_str())
    }
}

/// True if `text` starts with `<scheme>:` for one of the known URL schemes.
fn has_url_scheme(text: &str) -> bool {
    text.split_once(':')
        .map(|(scheme, _)| URL_SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)))
        .unwrap_or(false)
}

fn file_url(path: &Path, base_dir: &Path) -> Result<Url, ConfigurationError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    };
    let normalized = normalize_lexically(&joined);
    Url::from_file_path(&normalized)
        .map_err(|()| ConfigurationError::UnrepresentablePath { path: normalized })
}

/// Folds `.` and `..` components without consulting the file system.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
