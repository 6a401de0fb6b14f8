//! The shape index: immutable shape storage with lookup indexes.

use crate::{ModelError, ModelResult, Shape};
use shapegraph_core::{ShapeId, TraitKind};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// Member index: container ShapeId -> Set<member ShapeId>
#[derive(Debug, Default)]
struct MemberIndex {
    index: HashMap<ShapeId, BTreeSet<ShapeId>>,
}

impl MemberIndex {
    fn insert(&mut self, container: ShapeId, member: ShapeId) {
        self.index.entry(container).or_default().insert(member);
    }

    fn get(&self, container: &ShapeId) -> impl Iterator<Item = &ShapeId> + '_ {
        self.index.get(container).into_iter().flat_map(|set| set.iter())
    }
}

/// An immutable collection of shapes addressable by id.
#[derive(Debug, Default)]
pub struct ShapeIndex {
    /// Shape storage
    shapes: HashMap<ShapeId, Shape>,
    /// Members by container
    member_index: MemberIndex,
}

impl ShapeIndex {
    /// Create a new builder.
    pub fn builder() -> ShapeIndexBuilder {
        ShapeIndexBuilder::default()
    }

    /// Get a shape by id.
    pub fn get_shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    /// Get the number of shapes, members included.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterate over all shapes in no particular order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// Get the members whose container is `container`, ordered by id.
    pub fn members_of<'a>(&'a self, container: &ShapeId) -> impl Iterator<Item = &'a Shape> + 'a {
        self.member_index
            .get(container)
            .filter_map(move |id| self.shapes.get(id))
    }

    /// Get all shapes with a trait applied directly.
    pub fn shapes_with_trait<'a>(
        &'a self,
        kind: &'a TraitKind,
    ) -> impl Iterator<Item = &'a Shape> + 'a {
        self.shapes.values().filter(move |shape| shape.has_trait(kind))
    }
}

/// Builder for constructing an immutable ShapeIndex.
#[derive(Debug, Default)]
pub struct ShapeIndexBuilder {
    shapes: HashMap<ShapeId, Shape>,
}

impl ShapeIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape. Fails if a shape with the same id was already added.
    pub fn add_shape(&mut self, shape: Shape) -> ModelResult<&mut Self> {
        if self.shapes.contains_key(shape.id()) {
            return Err(ModelError::DuplicateShape(shape.id().clone()));
        }
        self.shapes.insert(shape.id().clone(), shape);
        Ok(self)
    }

    /// Add several shapes, stopping at the first duplicate.
    pub fn add_shapes(&mut self, shapes: impl IntoIterator<Item = Shape>) -> ModelResult<&mut Self> {
        for shape in shapes {
            self.add_shape(shape)?;
        }
        Ok(self)
    }

    /// Build the immutable ShapeIndex.
    ///
    /// Members that reference a missing container or target are kept; lookups
    /// through them simply find nothing.
    pub fn build(self) -> ShapeIndex {
        let mut member_index = MemberIndex::default();

        for shape in self.shapes.values() {
            let Some(member) = shape.as_member() else {
                continue;
            };
            if !self.shapes.contains_key(member.container()) {
                warn!(member = %shape.id(), container = %member.container(), "member container not found");
            }
            if !self.shapes.contains_key(member.target()) {
                warn!(member = %shape.id(), target = %member.target(), "member target not found");
            }
            member_index.insert(member.container().clone(), shape.id().clone());
        }

        debug!(shapes = self.shapes.len(), "built shape index");

        ShapeIndex {
            shapes: self.shapes,
            member_index,
        }
    }
}
