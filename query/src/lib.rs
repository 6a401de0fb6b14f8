//! shapegraph Query
//!
//! Read-only queries over a shape index.
//!
//! Responsibilities:
//! - Decide whether a trait is effectively applied to a shape
//! - Optionally let members inherit traits from their container
//! - Validate query configuration at build time

mod effective;
mod error;
mod options;

pub use effective::{EffectiveTraitQuery, EffectiveTraitQueryBuilder};
pub use error::{QueryError, QueryResult};
pub use options::QueryOptions;
