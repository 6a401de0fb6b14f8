//! Query error types.

use thiserror::Error;

/// Result type for query construction.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while building a query.
///
/// Evaluating a built query never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Missing required query setting: shape_index")]
    MissingShapeIndex,

    #[error("Missing required query setting: trait_kind")]
    MissingTraitKind,
}
