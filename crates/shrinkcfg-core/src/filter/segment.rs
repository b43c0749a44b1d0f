//! A single `/`-delimited piece of a compiled pattern.

use serde::Serialize;

/// One path segment of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    /// Exact text.
    Literal(String),
    /// `*`: exactly one path segment, any characters within it.
    AnySegment,
    /// `**`: zero or more path segments.
    AnyDepth,
    /// Literal text mixed with `*` (any run of characters) or `?` (any single
    /// character), e.g. `Foo*Impl`. Never crosses a segment boundary.
    Glob(String),
}

impl Segment {
    /// Classifies one segment of a pattern already in internal form.
    pub fn parse(text: &str) -> Self {
        match text {
            "*" => Segment::AnySegment,
            "**" => Segment::AnyDepth,
            t if t.contains(['*', '?']) => Segment::Glob(t.to_string()),
            t => Segment::Literal(t.to_string()),
        }
    }

    /// Pattern text of this segment.
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Literal(t) | Segment::Glob(t) => t,
            Segment::AnySegment => "*",
            Segment::AnyDepth => "**",
        }
    }

    /// True if this segment matches exactly one name segment.
    ///
    /// `AnyDepth` is handled by the caller since it may consume any number of
    /// segments; asked about a single one it answers `true`.
    pub fn matches_one(&self, name: &str) -> bool {
        match self {
            Segment::Literal(t) => t == name,
            Segment::AnySegment | Segment::AnyDepth => true,
            Segment::Glob(g) => glob_match(g.as_bytes(), name.as_bytes()),
        }
    }
}

/// Iterative wildcard match with single-star backtracking.
fn glob_match(pattern: &[u8], text: &[u8]) -> bool {
    let (mut p, mut t) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some(b'*') => {
                // Collapse runs of '*'.
                while pattern.get(p) == Some(&b'*') {
                    p += 1;
                }
                star = Some((p, t));
            }
            Some(b'?') => {
                p += 1;
                t += utf8_width(text[t]);
            }
            Some(&c) if c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match star {
                Some((sp, st)) => {
                    let next = st + utf8_width(text[st]);
                    star = Some((sp, next));
                    p = sp;
                    t = next;
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == b'*')
}

/// Byte length of the UTF-8 sequence starting with `lead`.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0xF0..=0xFF => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}
