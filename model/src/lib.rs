//! shapegraph Model
//!
//! In-memory shape storage with indexed access:
//! - Shapes and members, with traits attached by kind
//! - Shape index: find shapes by id, members by container, shapes by trait
//! - Model: a shape index plus model metadata
//!
//! Indexes and models are immutable once built.

mod error;
mod index;
mod model;
mod shape;
mod traits;

pub use error::{ModelError, ModelResult};
pub use index::{ShapeIndex, ShapeIndexBuilder};
pub use model::{Model, ModelBuilder};
pub use shape::{MemberShape, Shape, ShapeBuilder, ShapeKind, ShapeType};
pub use traits::{Trait, TraitValue};

pub use shapegraph_core::{ShapeId, ShapeIdError, TraitKind};
