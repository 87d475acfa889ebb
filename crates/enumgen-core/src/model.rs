//! Input model for the enum generation engine
//!
//! These types are the already-parsed, immutable representation of the
//! enumerations declared in an external interface definition. They are
//! constructed once by the loader (or directly in tests), consumed by the
//! transformer, and discarded.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parsed interface definition, reduced to its enumerations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterfaceModel {
    /// Enumerations in declaration order
    #[serde(default)]
    pub enums: Vec<EnumModel>,
}

/// An enumeration as declared in the interface definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumModel {
    /// Logical/class name of the enumeration
    pub name: String,

    /// First API version exposing this enumeration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,

    /// Whether the whole enumeration is deprecated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Members keyed by element name; insertion order is declaration order
    /// and determines constant declaration order in generated code
    #[serde(default)]
    pub elements: IndexMap<String, EnumElement>,
}

/// A single enumeration member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumElement {
    /// Original identifier as declared in the schema (the "origin")
    pub name: String,

    /// Explicit override signaling the element needs a distinct
    /// storage/lookup identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_name: Option<String>,

    /// Explicit ordinal/backing value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,

    /// First API version exposing this element; never inherited from the
    /// enclosing enumeration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,

    /// Element-scoped deprecation flag; never inherited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Documentation lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
}

impl EnumModel {
    /// Create an enumeration with no members
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            since: None,
            deprecated: None,
            elements: IndexMap::new(),
        }
    }

    /// Add a member, keyed by its own name. Builder-style, used heavily
    /// in tests and fixtures.
    pub fn with_element(mut self, element: EnumElement) -> Self {
        self.elements.insert(element.name.clone(), element);
        self
    }
}

impl EnumElement {
    /// Create a member with only its origin name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal_name: None,
            value: None,
            since: None,
            deprecated: None,
            description: None,
        }
    }

    /// Set the explicit internal identifier override
    pub fn with_internal_name(mut self, internal_name: impl Into<String>) -> Self {
        self.internal_name = Some(internal_name.into());
        self
    }

    /// Set the explicit backing value
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the first exposing API version
    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    /// Mark the member deprecated
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }

    /// Set documentation lines
    pub fn with_description(mut self, lines: Vec<String>) -> Self {
        self.description = Some(lines);
        self
    }
}
