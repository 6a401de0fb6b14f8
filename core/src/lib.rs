//! shapegraph Core Types
//!
//! This crate provides the identifier types shared by the shapegraph crates:
//! - Shape identifiers (`namespace#Name` and `namespace#Name$member`)
//! - Trait kinds (the shape id of a trait definition)
//! - Identifier error types

mod error;
mod id;

pub use error::*;
pub use id::*;
