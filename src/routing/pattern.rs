//! Route pattern parsing.
//!
//! # Responsibilities
//! - Split a pattern such as `/users/:id/posts` into typed segments
//! - Reject patterns the tree cannot represent
//!
//! # Design Decisions
//! - Patterns are tokenized with the same `PathCursor` used at match time,
//!   so a pattern and the paths it accepts share one notion of "segment"
//! - A trailing `/` is ignored: the cursor treats it as exhausted anyway

use thiserror::Error;

use crate::segment::PathCursor;

/// Marker that introduces a named parameter segment.
pub const PARAM_PREFIX: char = ':';

/// One segment of a parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Literal text that must match exactly.
    Static(String),
    /// Any non-empty segment, captured under this name.
    Param(String),
}

/// Errors produced while parsing a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),

    #[error("pattern `{0}` contains an empty segment")]
    EmptySegment(String),

    #[error("pattern `{0}` has a parameter without a name")]
    UnnamedParam(String),

    #[error("pattern `{pattern}` repeats parameter `{name}`")]
    DuplicateParam { pattern: String, name: String },
}

/// Parse a route pattern into segments.
///
/// `"/"` parses to no segments at all.
pub fn parse_pattern(pattern: &str) -> Result<Vec<PatternSegment>, ParseError> {
    if !pattern.starts_with('/') {
        return Err(ParseError::MissingLeadingSlash(pattern.to_string()));
    }

    let mut cursor = PathCursor::new(pattern, "");
    let mut segments = Vec::new();

    while !cursor.at_end() {
        let segment = cursor.extract();
        if segment.is_empty() {
            return Err(ParseError::EmptySegment(pattern.to_string()));
        }

        match segment.strip_prefix(PARAM_PREFIX) {
            Some("") => return Err(ParseError::UnnamedParam(pattern.to_string())),
            Some(name) => {
                let repeated = segments
                    .iter()
                    .any(|s| matches!(s, PatternSegment::Param(existing) if existing == name));
                if repeated {
                    return Err(ParseError::DuplicateParam {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                segments.push(PatternSegment::Param(name.to_string()));
            }
            None => segments.push(PatternSegment::Static(segment.to_string())),
        }
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(s: &str) -> PatternSegment {
        PatternSegment::Static(s.into())
    }

    fn param(s: &str) -> PatternSegment {
        PatternSegment::Param(s.into())
    }

    #[test]
    fn test_parse_root() {
        assert_eq!(parse_pattern("/").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_mixed() {
        assert_eq!(
            parse_pattern("/users/:id/posts").unwrap(),
            vec![stat("users"), param("id"), stat("posts")]
        );
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(parse_pattern("/users/").unwrap(), vec![stat("users")]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_pattern("users"),
            Err(ParseError::MissingLeadingSlash("users".into()))
        );
        assert_eq!(
            parse_pattern(""),
            Err(ParseError::MissingLeadingSlash("".into()))
        );
        assert_eq!(
            parse_pattern("/a//b"),
            Err(ParseError::EmptySegment("/a//b".into()))
        );
        assert_eq!(
            parse_pattern("/a/:/b"),
            Err(ParseError::UnnamedParam("/a/:/b".into()))
        );
        assert_eq!(
            parse_pattern("/:id/x/:id"),
            Err(ParseError::DuplicateParam {
                pattern: "/:id/x/:id".into(),
                name: "id".into(),
            })
        );
    }
}
