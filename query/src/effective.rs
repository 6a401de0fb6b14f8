//! Effective trait queries.
//!
//! A trait is effectively applied to a shape when the shape carries it
//! according to the model's member trait rules, or, when enabled, when the
//! shape is a member whose container carries the trait directly.

use crate::{QueryError, QueryOptions, QueryResult};
use shapegraph_core::{ShapeId, TraitKind};
use shapegraph_model::{Model, Shape, ShapeIndex};
use tracing::{debug, trace};

/// Queries a shape index for effective traits bound to shapes and members.
///
/// A query is immutable and holds no per-call state, so one instance can be
/// evaluated any number of times, from any number of threads.
///
/// ```ignore
/// let query = EffectiveTraitQuery::builder()
///     .model(&model)
///     .trait_kind(sensitive)
///     .inherit_from_container(true)
///     .build()?;
///
/// assert!(query.is_trait_applied(&member_id));
/// ```
#[derive(Debug, Clone)]
pub struct EffectiveTraitQuery<'a> {
    shape_index: &'a ShapeIndex,
    trait_kind: TraitKind,
    inherit_from_container: bool,
}

impl<'a> EffectiveTraitQuery<'a> {
    /// Create a new query builder.
    pub fn builder() -> EffectiveTraitQueryBuilder<'a> {
        EffectiveTraitQueryBuilder::default()
    }

    /// Check if the trait is effectively applied to a shape.
    ///
    /// Returns false for ids that do not resolve to a shape in the index.
    pub fn is_trait_applied(&self, shape_id: impl AsRef<ShapeId>) -> bool {
        let shape_id = shape_id.as_ref();

        let Some(shape) = self.shape_index.get_shape(shape_id) else {
            trace!(shape = %shape_id, "shape not found");
            return false;
        };

        if shape.has_member_trait(self.shape_index, &self.trait_kind) {
            return true;
        }

        if !self.inherit_from_container {
            return false;
        }
        let Some(member) = shape.as_member() else {
            return false;
        };

        // Only traits applied directly to the container count: one hop, no member rules.
        let inherited = self
            .shape_index
            .get_shape(member.container())
            .is_some_and(|container| container.has_trait(&self.trait_kind));

        trace!(
            shape = %shape_id,
            container = %member.container(),
            inherited,
            "checked member container"
        );
        inherited
    }

    /// Iterate over every shape in the index the trait is effectively applied to.
    pub fn applied_shapes(&self) -> impl Iterator<Item = &'a Shape> + '_ {
        self.shape_index
            .shapes()
            .filter(move |shape| self.is_trait_applied(shape.id()))
    }

    /// Create a builder pre-populated with this query's settings.
    pub fn to_builder(&self) -> EffectiveTraitQueryBuilder<'a> {
        EffectiveTraitQueryBuilder {
            shape_index: Some(self.shape_index),
            trait_kind: Some(self.trait_kind.clone()),
            inherit_from_container: self.inherit_from_container,
        }
    }

    pub fn shape_index(&self) -> &'a ShapeIndex {
        self.shape_index
    }

    pub fn trait_kind(&self) -> &TraitKind {
        &self.trait_kind
    }

    pub fn inherits_from_container(&self) -> bool {
        self.inherit_from_container
    }

    /// Export the settings that do not depend on the shape index.
    pub fn options(&self) -> QueryOptions {
        QueryOptions::new(self.trait_kind.clone())
            .inherit_from_container(self.inherit_from_container)
    }
}

/// Builds a reusable EffectiveTraitQuery.
#[derive(Debug, Clone, Default)]
pub struct EffectiveTraitQueryBuilder<'a> {
    shape_index: Option<&'a ShapeIndex>,
    trait_kind: Option<TraitKind>,
    inherit_from_container: bool,
}

impl<'a> EffectiveTraitQueryBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the required shape index to query.
    pub fn shape_index(mut self, shape_index: &'a ShapeIndex) -> Self {
        self.shape_index = Some(shape_index);
        self
    }

    /// Set the required model to query. Same as passing its shape index.
    pub fn model(self, model: &'a Model) -> Self {
        self.shape_index(model.shape_index())
    }

    /// Set the required trait being queried.
    pub fn trait_kind(mut self, trait_kind: TraitKind) -> Self {
        self.trait_kind = Some(trait_kind);
        self
    }

    /// When testing member shapes, also check the container of the member
    /// for the trait. Off by default.
    pub fn inherit_from_container(mut self, inherit: bool) -> Self {
        self.inherit_from_container = inherit;
        self
    }

    /// Apply serialized settings: trait kind and container inheritance.
    pub fn options(self, options: QueryOptions) -> Self {
        self.trait_kind(options.trait_kind)
            .inherit_from_container(options.inherit_from_container)
    }

    /// Build the query. Fails if the shape index or trait kind was never set.
    pub fn build(&self) -> QueryResult<EffectiveTraitQuery<'a>> {
        let shape_index = self.shape_index.ok_or(QueryError::MissingShapeIndex)?;
        let trait_kind = self
            .trait_kind
            .clone()
            .ok_or(QueryError::MissingTraitKind)?;

        debug!(
            trait_kind = %trait_kind,
            inherit_from_container = self.inherit_from_container,
            "built effective trait query"
        );

        Ok(EffectiveTraitQuery {
            shape_index,
            trait_kind,
            inherit_from_container: self.inherit_from_container,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shapegraph_model::ShapeType;

    fn id(raw: &str) -> ShapeId {
        ShapeId::parse(raw).unwrap()
    }

    fn tag() -> TraitKind {
        TraitKind::parse("ns#tag").unwrap()
    }

    /// Container `ns#S` tagged, member `ns#S$m` untagged.
    fn tagged_container() -> ShapeIndex {
        let mut builder = ShapeIndex::builder();
        builder
            .add_shapes([
                Shape::builder(id("ns#S"), ShapeType::Structure)
                    .annotate(tag())
                    .build()
                    .unwrap(),
                Shape::builder(id("ns#Str"), ShapeType::String)
                    .build()
                    .unwrap(),
                Shape::member(id("ns#S$m"), id("ns#Str")).build().unwrap(),
            ])
            .unwrap();
        builder.build()
    }

    // ========== TEST: inherits_from_tagged_container ==========
    #[test]
    fn test_inherits_from_tagged_container() {
        // GIVEN container S tagged, member S$m untagged
        let index = tagged_container();

        // WHEN querying with inheritance enabled
        let query = EffectiveTraitQuery::builder()
            .shape_index(&index)
            .trait_kind(tag())
            .inherit_from_container(true)
            .build()
            .unwrap();

        // THEN the member has the trait
        assert!(query.is_trait_applied(&id("ns#S$m")));
    }

    // ========== TEST: no_inheritance_by_default ==========
    #[test]
    fn test_no_inheritance_by_default() {
        // GIVEN container S tagged, member S$m untagged
        let index = tagged_container();

        // WHEN querying with default settings
        let query = EffectiveTraitQuery::builder()
            .shape_index(&index)
            .trait_kind(tag())
            .build()
            .unwrap();

        // THEN the member does not have the trait, the container does
        assert!(!query.is_trait_applied(&id("ns#S$m")));
        assert!(query.is_trait_applied(&id("ns#S")));
        assert!(!query.inherits_from_container());
    }

    // ========== TEST: unknown_shape_is_false ==========
    #[test]
    fn test_unknown_shape_is_false() {
        let index = tagged_container();
        let query = EffectiveTraitQuery::builder()
            .shape_index(&index)
            .trait_kind(tag())
            .inherit_from_container(true)
            .build()
            .unwrap();

        assert!(!query.is_trait_applied(&id("ns#Missing")));
        assert!(!query.is_trait_applied(&id("ns#S$missing")));
    }

    // ========== TEST: build_requires_shape_index ==========
    #[test]
    fn test_build_requires_shape_index() {
        let result = EffectiveTraitQuery::builder().trait_kind(tag()).build();

        assert_eq!(result.unwrap_err(), QueryError::MissingShapeIndex);
    }

    // ========== TEST: build_requires_trait_kind ==========
    #[test]
    fn test_build_requires_trait_kind() {
        let index = tagged_container();
        let result = EffectiveTraitQuery::builder().shape_index(&index).build();

        assert_eq!(result.unwrap_err(), QueryError::MissingTraitKind);
    }

    // ========== TEST: to_builder_copies_settings ==========
    #[test]
    fn test_to_builder_copies_settings() {
        let index = tagged_container();
        let query = EffectiveTraitQuery::builder()
            .shape_index(&index)
            .trait_kind(tag())
            .inherit_from_container(true)
            .build()
            .unwrap();

        let copy = query.to_builder().build().unwrap();
        let relaxed = query.to_builder().inherit_from_container(false).build().unwrap();

        assert_eq!(copy.trait_kind(), query.trait_kind());
        assert!(copy.inherits_from_container());
        assert!(std::ptr::eq(copy.shape_index(), query.shape_index()));
        assert!(copy.is_trait_applied(&id("ns#S$m")));
        assert!(!relaxed.is_trait_applied(&id("ns#S$m")));
        // The original is untouched.
        assert!(query.is_trait_applied(&id("ns#S$m")));
    }

    // ========== TEST: options_round_trip ==========
    #[test]
    fn test_options_round_trip() {
        let index = tagged_container();
        let options = QueryOptions::new(tag()).inherit_from_container(true);

        let query = EffectiveTraitQuery::builder()
            .shape_index(&index)
            .options(options.clone())
            .build()
            .unwrap();

        assert_eq!(query.options(), options);
        assert!(query.is_trait_applied(&id("ns#S$m")));
    }

    // ========== TEST: applied_shapes ==========
    #[test]
    fn test_applied_shapes() {
        let index = tagged_container();
        let query = EffectiveTraitQuery::builder()
            .shape_index(&index)
            .trait_kind(tag())
            .inherit_from_container(true)
            .build()
            .unwrap();

        let mut applied: Vec<String> = query
            .applied_shapes()
            .map(|shape| shape.id().to_string())
            .collect();
        applied.sort();

        assert_eq!(applied, vec!["ns#S", "ns#S$m"]);
    }
}
