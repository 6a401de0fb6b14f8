//! Identity types for shapes and traits.
//!
//! A shape id is made of a namespace, a shape name and an optional member
//! name: `example.weather#Forecast$chanceOfRain`. Ids are immutable once
//! parsed and compare by their components.

use crate::{ShapeIdError, ShapeIdResult};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const IDENTIFIER: &str = r"(?:_+[A-Za-z0-9]|[A-Za-z])[A-Za-z0-9_]*";

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{IDENTIFIER}$")).expect("identifier pattern"))
}

fn namespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^{IDENTIFIER}(?:\.{IDENTIFIER})*$")).expect("namespace pattern")
    })
}

fn is_identifier(s: &str) -> bool {
    identifier_re().is_match(s)
}

/// Unique identifier for a shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeId {
    namespace: String,
    name: String,
    member: Option<String>,
}

impl ShapeId {
    /// Parse an absolute shape id.
    pub fn parse(id: &str) -> ShapeIdResult<Self> {
        if id.is_empty() {
            return Err(ShapeIdError::Empty);
        }

        let (namespace, rest) = id
            .split_once('#')
            .ok_or_else(|| ShapeIdError::MissingNamespace(id.to_string()))?;

        let (name, member) = match rest.split_once('$') {
            Some((name, member)) => (name, Some(member)),
            None => (rest, None),
        };

        Self::from_parts(namespace, name, member)
    }

    /// Build a shape id from its parts, validating each one.
    pub fn from_parts(namespace: &str, name: &str, member: Option<&str>) -> ShapeIdResult<Self> {
        if !namespace_re().is_match(namespace) {
            return Err(ShapeIdError::InvalidNamespace(namespace.to_string()));
        }
        if !is_identifier(name) {
            return Err(ShapeIdError::InvalidName(name.to_string()));
        }
        if let Some(member) = member {
            if !is_identifier(member) {
                return Err(ShapeIdError::InvalidMember(member.to_string()));
            }
        }

        Ok(Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            member: member.map(str::to_string),
        })
    }

    /// Get the namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the shape name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the member name, if this id refers to a member.
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// Returns true if this id refers to a member.
    pub fn has_member(&self) -> bool {
        self.member.is_some()
    }

    /// Create a new id for a member of this shape.
    ///
    /// Any existing member segment is replaced.
    pub fn with_member(&self, member: impl AsRef<str>) -> ShapeIdResult<Self> {
        let member = member.as_ref();
        if !is_identifier(member) {
            return Err(ShapeIdError::InvalidMember(member.to_string()));
        }
        Ok(Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: Some(member.to_string()),
        })
    }

    /// Get the id of the enclosing shape (this id minus its member segment).
    pub fn without_member(&self) -> Self {
        Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: None,
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)?;
        if let Some(member) = &self.member {
            write!(f, "${}", member)?;
        }
        Ok(())
    }
}

impl FromStr for ShapeId {
    type Err = ShapeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ShapeId {
    type Error = ShapeIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for ShapeId {
    type Error = ShapeIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl AsRef<ShapeId> for ShapeId {
    fn as_ref(&self) -> &ShapeId {
        self
    }
}

impl From<ShapeId> for String {
    fn from(id: ShapeId) -> Self {
        id.to_string()
    }
}

/// Identifier for a kind of trait.
///
/// A trait kind is the shape id of the trait's definition, e.g.
/// `smithy.api#sensitive`. It is compared by identity only: nothing checks
/// that a definition with this id exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitKind(ShapeId);

impl TraitKind {
    pub fn new(id: ShapeId) -> Self {
        Self(id)
    }

    /// Parse a trait kind from an absolute shape id.
    pub fn parse(id: &str) -> ShapeIdResult<Self> {
        ShapeId::parse(id).map(Self)
    }

    /// Get the shape id of the trait definition.
    pub fn id(&self) -> &ShapeId {
        &self.0
    }
}

impl From<ShapeId> for TraitKind {
    fn from(id: ShapeId) -> Self {
        Self(id)
    }
}

impl FromStr for TraitKind {
    type Err = ShapeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TraitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
