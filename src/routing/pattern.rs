//! Pattern compilation.
//!
//! # Syntax
//! ```text
//!  /users/:id          named parameter, matches any single segment
//!  /images/            trailing slash: prefix match over the listed segments
//!  /images/image-...   final segment is a string prefix of the request segment
//!  /                   the bare root, always an exact match
//! ```
//!
//! Empty segments are ignored, so `/a//b` and `/a/b` compile to the same
//! segments.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::routing::method::MethodFilter;

const PARAM_MARKER: char = ':';
const PREFIX_MARKER: &str = "...";

/// Errors raised while compiling a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern `{0}` must begin with '/'")]
    MissingLeadingSlash(String),

    #[error("pattern `{pattern}`: prefix segment `{segment}` is only allowed as the last segment")]
    PrefixNotLast { pattern: String, segment: String },

    #[error("pattern `{0}` is a prefix match without any segments")]
    EmptyPrefix(String),

    #[error("pattern `{0}` has a parameter without a name")]
    UnnamedParam(String),

    #[error("unknown method `{0}`")]
    UnknownMethod(String),
}

/// One compiled segment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Equal, case-sensitively, to the request segment.
    Literal(String),
    /// Binds the request segment under this name.
    Param(String),
    /// A string prefix of the request segment, with the marker stripped.
    PrefixLiteral(String),
}

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    pub(crate) method: MethodFilter,
    #[serde(rename = "pattern")]
    pub(crate) source: String,
    pub(crate) segments: Vec<Segment>,
    #[serde(rename = "prefix")]
    pub(crate) is_prefix: bool,
}

impl Pattern {
    /// Compile `pattern` for requests accepted by `method`.
    pub fn new(method: impl Into<MethodFilter>, pattern: &str) -> Result<Self, PatternError> {
        let segments = parse_segments(pattern, true)?;

        // the bare root is never a prefix
        let trailing_slash = pattern != "/" && pattern.ends_with('/');
        if trailing_slash && segments.is_empty() {
            return Err(PatternError::EmptyPrefix(pattern.to_string()));
        }

        let last = segments.len().saturating_sub(1);
        for (i, segment) in segments.iter().enumerate() {
            if let Segment::PrefixLiteral(literal) = segment {
                if i != last {
                    return Err(PatternError::PrefixNotLast {
                        pattern: pattern.to_string(),
                        segment: format!("{literal}{PREFIX_MARKER}"),
                    });
                }
            }
        }

        let is_prefix =
            trailing_slash || matches!(segments.last(), Some(Segment::PrefixLiteral(_)));

        Ok(Self {
            method: method.into(),
            source: pattern.to_string(),
            segments,
            is_prefix,
        })
    }

    pub fn method(&self) -> MethodFilter {
        self.method
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_prefix(&self) -> bool {
        self.is_prefix
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.source)
    }
}

/// The leading segments a subrouter consumes before delegating.
///
/// Literals and parameters only: a `...` suffix is compared as plain text and
/// a trailing slash changes nothing, the prefix always covers exactly its own
/// segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountPrefix {
    #[serde(rename = "prefix")]
    pub(crate) source: String,
    pub(crate) segments: Vec<Segment>,
}

impl MountPrefix {
    pub fn new(prefix: &str) -> Result<Self, PatternError> {
        Ok(Self {
            source: prefix.to_string(),
            segments: parse_segments(prefix, false)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of request segments consumed on a match.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for MountPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_segments(pattern: &str, honor_prefix_marker: bool) -> Result<Vec<Segment>, PatternError> {
    if !pattern.starts_with('/') {
        return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
    }

    pattern
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if let Some(name) = segment.strip_prefix(PARAM_MARKER) {
                if name.is_empty() {
                    return Err(PatternError::UnnamedParam(pattern.to_string()));
                }
                return Ok(Segment::Param(name.to_string()));
            }

            match segment.strip_suffix(PREFIX_MARKER) {
                Some(literal) if honor_prefix_marker => {
                    Ok(Segment::PrefixLiteral(literal.to_string()))
                }
                _ => Ok(Segment::Literal(segment.to_string())),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::method::Verb;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.into())
    }

    fn param(s: &str) -> Segment {
        Segment::Param(s.into())
    }

    #[test]
    fn test_compile_literals_and_params() {
        let pattern = Pattern::new(Verb::Get, "/api/person/:id").unwrap();
        assert_eq!(pattern.segments(), [lit("api"), lit("person"), param("id")]);
        assert!(!pattern.is_prefix());
        assert_eq!(pattern.method(), MethodFilter::Only(Verb::Get));
        assert_eq!(pattern.to_string(), "get /api/person/:id");
    }

    #[test]
    fn test_trailing_slash_is_prefix() {
        let pattern = Pattern::new(MethodFilter::Any, "/images/").unwrap();
        assert_eq!(pattern.segments(), [lit("images")]);
        assert!(pattern.is_prefix());
    }

    #[test]
    fn test_root_is_never_prefix() {
        let pattern = Pattern::new(Verb::Get, "/").unwrap();
        assert!(pattern.segments().is_empty());
        assert!(!pattern.is_prefix());
    }

    #[test]
    fn test_prefix_literal() {
        let pattern = Pattern::new(Verb::Get, "/images/image-...").unwrap();
        assert_eq!(
            pattern.segments(),
            [lit("images"), Segment::PrefixLiteral("image-".into())]
        );
        assert!(pattern.is_prefix());
    }

    #[test]
    fn test_empty_segments_ignored() {
        let a = Pattern::new(Verb::Get, "/a//b").unwrap();
        let b = Pattern::new(Verb::Get, "/a/b").unwrap();
        assert_eq!(a.segments(), b.segments());
    }

    #[test]
    fn test_malformed_patterns() {
        assert_eq!(
            Pattern::new(Verb::Get, "images"),
            Err(PatternError::MissingLeadingSlash("images".into()))
        );
        assert_eq!(
            Pattern::new(Verb::Get, "/images/image-.../large"),
            Err(PatternError::PrefixNotLast {
                pattern: "/images/image-.../large".into(),
                segment: "image-...".into(),
            })
        );
        assert_eq!(
            Pattern::new(Verb::Get, "//"),
            Err(PatternError::EmptyPrefix("//".into()))
        );
        assert_eq!(
            Pattern::new(Verb::Get, "/users/:"),
            Err(PatternError::UnnamedParam("/users/:".into()))
        );
    }

    #[test]
    fn test_mount_prefix_ignores_prefix_marker() {
        let prefix = MountPrefix::new("/static.../:id/").unwrap();
        assert_eq!(prefix.segments(), [lit("static..."), param("id")]);
        assert_eq!(prefix.len(), 2);

        assert!(MountPrefix::new("/").unwrap().is_empty());
        assert!(MountPrefix::new("api").is_err());
    }
}
