//! The Model: a shape index plus model-level metadata.

use crate::{ModelResult, Shape, ShapeIndex, ShapeIndexBuilder, TraitValue};
use std::collections::BTreeMap;

/// A complete model. Immutable after construction via ModelBuilder.
#[derive(Debug, Default)]
pub struct Model {
    shape_index: ShapeIndex,
    metadata: BTreeMap<String, TraitValue>,
}

impl Model {
    /// Create a new builder.
    pub fn builder() -> ModelBuilder {
        ModelBuilder::default()
    }

    /// Get the shapes of this model.
    pub fn shape_index(&self) -> &ShapeIndex {
        &self.shape_index
    }

    /// Get a metadata value by key.
    pub fn get_metadata(&self, key: &str) -> Option<&TraitValue> {
        self.metadata.get(key)
    }

    /// Iterate over all metadata, ordered by key.
    pub fn metadata(&self) -> impl Iterator<Item = (&str, &TraitValue)> {
        self.metadata.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<ShapeIndex> for Model {
    fn from(shape_index: ShapeIndex) -> Self {
        Self {
            shape_index,
            metadata: BTreeMap::new(),
        }
    }
}

/// Builder for constructing an immutable Model.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    shapes: ShapeIndexBuilder,
    metadata: BTreeMap<String, TraitValue>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape. Fails if a shape with the same id was already added.
    pub fn add_shape(&mut self, shape: Shape) -> ModelResult<&mut Self> {
        self.shapes.add_shape(shape)?;
        Ok(self)
    }

    /// Set a metadata value, replacing any previous value for the key.
    pub fn metadata(&mut self, key: impl Into<String>, value: impl Into<TraitValue>) -> &mut Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Build the immutable Model.
    pub fn build(self) -> Model {
        Model {
            shape_index: self.shapes.build(),
            metadata: self.metadata,
        }
    }
}
