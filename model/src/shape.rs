//! Shape structures.
//!
//! A shape is either a top-level shape of some `ShapeType` or a member
//! belonging to exactly one container shape.

use crate::{ModelError, ModelResult, ShapeIndex, Trait};
use shapegraph_core::{ShapeId, TraitKind};
use std::collections::BTreeMap;
use std::fmt;

/// Type of a non-member shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Blob,
    Boolean,
    String,
    Integer,
    Long,
    Float,
    Double,
    Timestamp,
    Document,
    List,
    Map,
    Structure,
    Union,
    Operation,
    Resource,
    Service,
}

impl ShapeType {
    /// Returns true if shapes of this type can contain members.
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            ShapeType::List | ShapeType::Map | ShapeType::Structure | ShapeType::Union
        )
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeType::Blob => "blob",
            ShapeType::Boolean => "boolean",
            ShapeType::String => "string",
            ShapeType::Integer => "integer",
            ShapeType::Long => "long",
            ShapeType::Float => "float",
            ShapeType::Double => "double",
            ShapeType::Timestamp => "timestamp",
            ShapeType::Document => "document",
            ShapeType::List => "list",
            ShapeType::Map => "map",
            ShapeType::Structure => "structure",
            ShapeType::Union => "union",
            ShapeType::Operation => "operation",
            ShapeType::Resource => "resource",
            ShapeType::Service => "service",
        };
        write!(f, "{}", name)
    }
}

/// The member-specific part of a member shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberShape {
    container: ShapeId,
    target: ShapeId,
    member_name: String,
}

impl MemberShape {
    /// Id of the shape that contains this member.
    pub fn container(&self) -> &ShapeId {
        &self.container
    }

    /// Id of the shape this member targets.
    pub fn target(&self) -> &ShapeId {
        &self.target
    }

    pub fn member_name(&self) -> &str {
        &self.member_name
    }
}

/// What kind of shape this is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    Shape(ShapeType),
    Member(MemberShape),
}

/// A shape in the index.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    traits: BTreeMap<TraitKind, Trait>,
}

impl Shape {
    /// Start building a non-member shape.
    pub fn builder(id: ShapeId, shape_type: ShapeType) -> ShapeBuilder {
        ShapeBuilder {
            id,
            pending: PendingKind::Shape(shape_type),
            traits: BTreeMap::new(),
        }
    }

    /// Start building a member shape. The container is derived from `id`.
    pub fn member(id: ShapeId, target: ShapeId) -> ShapeBuilder {
        ShapeBuilder {
            id,
            pending: PendingKind::Member(target),
            traits: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Get the shape type, or `None` for members.
    pub fn shape_type(&self) -> Option<ShapeType> {
        match &self.kind {
            ShapeKind::Shape(shape_type) => Some(*shape_type),
            ShapeKind::Member(_) => None,
        }
    }

    pub fn is_member(&self) -> bool {
        matches!(self.kind, ShapeKind::Member(_))
    }

    /// Narrow to the member part of this shape.
    pub fn as_member(&self) -> Option<&MemberShape> {
        match &self.kind {
            ShapeKind::Member(member) => Some(member),
            ShapeKind::Shape(_) => None,
        }
    }

    /// Get a trait applied directly to this shape.
    pub fn get_trait(&self, kind: &TraitKind) -> Option<&Trait> {
        self.traits.get(kind)
    }

    /// Check if a trait is applied directly to this shape.
    pub fn has_trait(&self, kind: &TraitKind) -> bool {
        self.traits.contains_key(kind)
    }

    /// Iterate over the traits applied directly to this shape, ordered by kind.
    pub fn traits(&self) -> impl Iterator<Item = &Trait> {
        self.traits.values()
    }

    /// Get a trait from this shape, or, for members, from the member's target.
    ///
    /// A trait applied to the member itself takes precedence over the same
    /// trait on the target. A target missing from `index` contributes nothing.
    pub fn get_member_trait<'a>(
        &'a self,
        index: &'a ShapeIndex,
        kind: &TraitKind,
    ) -> Option<&'a Trait> {
        if let Some(found) = self.get_trait(kind) {
            return Some(found);
        }
        let member = self.as_member()?;
        index.get_shape(member.target())?.get_trait(kind)
    }

    /// Check if a trait is present according to `get_member_trait`.
    pub fn has_member_trait(&self, index: &ShapeIndex, kind: &TraitKind) -> bool {
        self.get_member_trait(index, kind).is_some()
    }
}

impl AsRef<ShapeId> for Shape {
    fn as_ref(&self) -> &ShapeId {
        &self.id
    }
}

#[derive(Debug)]
enum PendingKind {
    Shape(ShapeType),
    Member(ShapeId),
}

/// Builder for a single shape.
#[derive(Debug)]
pub struct ShapeBuilder {
    id: ShapeId,
    pending: PendingKind,
    traits: BTreeMap<TraitKind, Trait>,
}

impl ShapeBuilder {
    /// Apply a trait. A trait of the same kind replaces the previous one.
    pub fn with_trait(mut self, applied: Trait) -> Self {
        self.traits.insert(applied.kind.clone(), applied);
        self
    }

    /// Apply a presence-only trait.
    pub fn annotate(self, kind: TraitKind) -> Self {
        self.with_trait(Trait::annotation(kind))
    }

    /// Finish building this shape.
    pub fn build(self) -> ModelResult<Shape> {
        let kind = match self.pending {
            PendingKind::Shape(shape_type) => {
                if self.id.has_member() {
                    return Err(ModelError::UnexpectedMemberId(self.id));
                }
                ShapeKind::Shape(shape_type)
            }
            PendingKind::Member(target) => {
                let Some(member_name) = self.id.member() else {
                    return Err(ModelError::MemberIdRequired(self.id));
                };
                ShapeKind::Member(MemberShape {
                    container: self.id.without_member(),
                    target,
                    member_name: member_name.to_string(),
                })
            }
        };

        Ok(Shape {
            id: self.id,
            kind,
            traits: self.traits,
        })
    }
}
