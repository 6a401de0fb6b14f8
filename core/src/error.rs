//! Identifier error types.

use thiserror::Error;

/// Errors that can occur while parsing or building a shape identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeIdError {
    /// The input was empty.
    #[error("Shape id is empty")]
    Empty,

    /// The input has no `#` separating namespace and name.
    #[error("Shape id is missing a namespace: {0}")]
    MissingNamespace(String),

    /// The namespace is not a dot-separated list of identifiers.
    #[error("Invalid namespace: {0}")]
    InvalidNamespace(String),

    /// The shape name is not a valid identifier.
    #[error("Invalid shape name: {0}")]
    InvalidName(String),

    /// The member name is not a valid identifier.
    #[error("Invalid member name: {0}")]
    InvalidMember(String),
}

/// Result type for identifier operations.
pub type ShapeIdResult<T> = Result<T, ShapeIdError>;
