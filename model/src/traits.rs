//! Traits attached to shapes.

use serde::{Deserialize, Serialize};
use shapegraph_core::TraitKind;

/// The value carried by a trait application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraitValue {
    /// Presence-only trait (e.g. `@sensitive`).
    Annotation,
    Bool(bool),
    Int(i64),
    String(String),
    List(Vec<TraitValue>),
}

impl From<bool> for TraitValue {
    fn from(b: bool) -> Self {
        TraitValue::Bool(b)
    }
}

impl From<i64> for TraitValue {
    fn from(i: i64) -> Self {
        TraitValue::Int(i)
    }
}

impl From<&str> for TraitValue {
    fn from(s: &str) -> Self {
        TraitValue::String(s.to_string())
    }
}

impl From<String> for TraitValue {
    fn from(s: String) -> Self {
        TraitValue::String(s)
    }
}

/// A trait applied to a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Trait {
    /// Kind of this trait.
    pub kind: TraitKind,
    /// Value of this trait application.
    pub value: TraitValue,
}

impl Trait {
    pub fn new(kind: TraitKind, value: impl Into<TraitValue>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Create a presence-only trait.
    pub fn annotation(kind: TraitKind) -> Self {
        Self {
            kind,
            value: TraitValue::Annotation,
        }
    }

    /// Returns true if this trait carries no value.
    pub fn is_annotation(&self) -> bool {
        matches!(self.value, TraitValue::Annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_trait() {
        let kind = TraitKind::parse("smithy.api#sensitive").unwrap();

        assert!(Trait::annotation(kind.clone()).is_annotation());
        assert!(!Trait::new(kind, true).is_annotation());
    }

    #[test]
    fn test_value_serde() {
        let value = TraitValue::List(vec![TraitValue::Int(1), "two".into()]);
        let json = serde_json::to_string(&value).unwrap();

        assert_eq!(json, r#"{"List":[{"Int":1},{"String":"two"}]}"#);
        assert_eq!(serde_json::from_str::<TraitValue>(&json).unwrap(), value);
    }
}
