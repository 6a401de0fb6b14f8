//! Serializable query settings.

use serde::{Deserialize, Serialize};
use shapegraph_core::TraitKind;

/// The part of an effective trait query that does not depend on a shape index.
///
/// Lets a query be described in configuration, e.g.
/// `{"trait_kind": "smithy.api#sensitive", "inherit_from_container": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Trait to detect on shapes.
    pub trait_kind: TraitKind,
    /// Whether members also check their container for the trait.
    #[serde(default)]
    pub inherit_from_container: bool,
}

impl QueryOptions {
    pub fn new(trait_kind: TraitKind) -> Self {
        Self {
            trait_kind,
            inherit_from_container: false,
        }
    }

    pub fn inherit_from_container(mut self, inherit: bool) -> Self {
        self.inherit_from_container = inherit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_with_default_inheritance() {
        let options: QueryOptions =
            serde_json::from_str(r#"{"trait_kind": "smithy.api#sensitive"}"#).unwrap();

        assert_eq!(
            options,
            QueryOptions::new(TraitKind::parse("smithy.api#sensitive").unwrap())
        );
        assert!(!options.inherit_from_container);
    }

    #[test]
    fn test_deserialize_with_inheritance() {
        let options: QueryOptions = serde_json::from_str(
            r#"{"trait_kind": "smithy.api#sensitive", "inherit_from_container": true}"#,
        )
        .unwrap();

        assert!(options.inherit_from_container);
    }

    #[test]
    fn test_deserialize_rejects_invalid_trait_kind() {
        let result = serde_json::from_str::<QueryOptions>(r#"{"trait_kind": "sensitive"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_serialize() {
        let options = QueryOptions::new(TraitKind::parse("ns#tag").unwrap()).inherit_from_container(true);

        assert_eq!(
            serde_json::to_string(&options).unwrap(),
            r#"{"trait_kind":"ns#tag","inherit_from_container":true}"#
        );
    }
}
