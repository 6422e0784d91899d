//! Error types for network operations.
//!
//! Structural mismatches are never silently ignored: insertion merges or
//! appends, removal succeeds or fails with `NotFound`, and text entry points
//! propagate the parser collaborator's failure unchanged.

use crate::types::ElementKind;
use std::error::Error;
use std::fmt;

/// Result type for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors surfaced by the network container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A removal or required lookup named an element absent from its
    /// collection. Fatal to that call; the network is unchanged.
    NotFound { kind: ElementKind, detail: String },
    /// Text handed to an add/remove entry point was rejected by the parser
    /// collaborator.
    Parse(ParseError),
}

impl NetworkError {
    pub fn not_found(kind: ElementKind, detail: impl Into<String>) -> Self {
        NetworkError::NotFound {
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::NotFound { kind, detail } => {
                write!(f, "{} not found: {}", kind, detail)
            }
            NetworkError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl Error for NetworkError {}

impl From<ParseError> for NetworkError {
    fn from(e: ParseError) -> Self {
        NetworkError::Parse(e)
    }
}

/// Failure reported by a [`NotationParser`] implementation.
///
/// [`NotationParser`]: crate::io::NotationParser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The element kind the caller asked for.
    pub kind: ElementKind,
    /// What went wrong, including the offending fragment.
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ElementKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} notation: {}", self.kind, self.message)
    }
}

impl Error for ParseError {}
