//! Dotted-path parsing and validation.
//!
//! A path addresses a node in the tree as a sequence of segment names
//! joined by [`SEPARATOR`]. Write paths may use the [`WILDCARD`] token
//! as a full segment to fan a write out over every existing child at
//! that position; read paths may not. Segments equal to the codec's
//! reserved structural keys are rejected up front so they can never
//! collide with the on-disk encoding.

use thiserror::Error;

/// Path segment separator.
pub const SEPARATOR: char = '.';

/// Wildcard segment token, valid only in write paths.
pub const WILDCARD: &str = "*";

/// Reserved key under which the codec stores a node's scalar when the
/// node also has children.
pub const VALUE_KEY: &str = "value";

/// Reserved structural key used by historical encodings for child
/// enumeration; rejected in paths for the same reason as [`VALUE_KEY`].
pub const CHILDREN_KEY: &str = "children";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path must not be empty")]
    Empty,
    #[error("empty segment in path '{0}'")]
    EmptySegment(String),
    #[error("segment '{0}' is a reserved key")]
    ReservedSegment(String),
    #[error("wildcard '*' is forbidden in read paths")]
    WildcardInRead,
    #[error("wildcard must be a full segment, found '{0}'")]
    EmbeddedWildcard(String),
}

/// Split and validate a write path.
///
/// A full `*` segment is permitted and later expands over the children
/// existing at that position.
///
/// # Example
///
/// ```
/// use config_tree::path::parse_write_path;
///
/// assert_eq!(parse_write_path("a.b").unwrap(), vec!["a", "b"]);
/// assert_eq!(parse_write_path("*.enabled").unwrap(), vec!["*", "enabled"]);
/// assert!(parse_write_path("a..b").is_err());
/// assert!(parse_write_path("value.x").is_err());
/// ```
pub fn parse_write_path(raw: &str) -> Result<Vec<String>, PathError> {
    parse(raw, true)
}

/// Split and validate a read path.
///
/// Wildcards are rejected anywhere: a read addresses exactly one node.
///
/// # Example
///
/// ```
/// use config_tree::path::{parse_read_path, PathError};
///
/// assert_eq!(parse_read_path("a.b").unwrap(), vec!["a", "b"]);
/// assert_eq!(parse_read_path("*.enabled"), Err(PathError::WildcardInRead));
/// ```
pub fn parse_read_path(raw: &str) -> Result<Vec<String>, PathError> {
    parse(raw, false)
}

fn parse(raw: &str, wildcard_allowed: bool) -> Result<Vec<String>, PathError> {
    if raw.is_empty() {
        return Err(PathError::Empty);
    }
    let mut segments = Vec::new();
    for segment in raw.split(SEPARATOR) {
        if segment.is_empty() {
            return Err(PathError::EmptySegment(raw.to_string()));
        }
        if segment == VALUE_KEY || segment == CHILDREN_KEY {
            return Err(PathError::ReservedSegment(segment.to_string()));
        }
        if segment.contains(WILDCARD) {
            if !wildcard_allowed {
                return Err(PathError::WildcardInRead);
            }
            if segment != WILDCARD {
                return Err(PathError::EmbeddedWildcard(segment.to_string()));
            }
        }
        segments.push(segment.to_string());
    }
    Ok(segments)
}
