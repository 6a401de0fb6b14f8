//! Model construction errors.

use shapegraph_core::ShapeId;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building shapes, indexes and models.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A shape with the same id was already added.
    #[error("Duplicate shape: {0}")]
    DuplicateShape(ShapeId),

    /// A member shape was given an id without a member segment.
    #[error("Member shape id must contain a member name: {0}")]
    MemberIdRequired(ShapeId),

    /// A non-member shape was given an id with a member segment.
    #[error("Only member shapes may have a member name: {0}")]
    UnexpectedMemberId(ShapeId),
}
