//! Enum classification and parameter derivation
//!
//! This module is the heart of the generator: it decides, per enumeration,
//! which representation strategy the generated class uses and derives the
//! generation-safe constant identifier for every member.
//!
//! The decision is enum-scoped but informed by a scan over all members:
//! a first pass reduces the members to two booleans (any explicit backing
//! value, any member needing a decoupled identifier), a second pass derives
//! the per-member parameters with the resolved [`Kind`] as shared context.
//!
//! # Example
//!
//! ```
//! use enumgen_core::model::{EnumElement, EnumModel};
//! use enumgen_core::transform::{EnumTransformer, Kind};
//!
//! let transformer = EnumTransformer::new("com.example.api.enums");
//! let model = EnumModel::new("SamplingRate")
//!     .with_element(EnumElement::new("8KHZ").with_internal_name("SamplingRate_8KHZ"));
//!
//! let record = transformer.transform(&model);
//! assert_eq!(record.kind, Kind::Custom);
//! assert_eq!(record.params[0].name, "_8KHZ");
//! assert_eq!(record.params[0].internal.as_deref(), Some("\"8KHZ\""));
//! ```

use crate::model::{EnumElement, EnumModel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Support import required by generated lookup tables
pub const ENUM_SET_IMPORT: &str = "java.util.EnumSet";

/// Representation strategy chosen for an enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Direct name-based representation; constants need no backing data
    Simple,
    /// String-literal-backed lookup table; at least one member's constant
    /// identifier is decoupled from its wire string
    Custom,
    /// Integer-value-backed representation; at least one member declares an
    /// explicit backing value
    Complex,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Simple => write!(f, "simple"),
            Kind::Custom => write!(f, "custom"),
            Kind::Complex => write!(f, "complex"),
        }
    }
}

/// Per-member generation parameters
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ElementParams {
    /// Derived, generation-safe constant identifier
    pub name: String,

    /// The member's original wire-exact name, never altered
    pub origin: String,

    /// Quoted string literal of `origin`, present for every member of a
    /// `custom`/`complex` enumeration and absent for `simple`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal: Option<String>,

    /// Explicit backing value, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,

    /// Element-scoped version, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,

    /// Element-scoped deprecation flag, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Documentation lines, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
}

/// Everything the template renderer needs to emit one enum class
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerationRecord {
    /// Chosen representation strategy, applied uniformly to all members
    pub kind: Kind,

    /// Backing type of the generated accessor: `"int"` for complex
    /// enumerations, `"String"` otherwise
    pub return_type: String,

    /// Destination package, copied verbatim from configuration
    pub package_name: String,

    /// Generated class name, equal to the model's name
    pub class_name: String,

    /// Fully-qualified imports required by the chosen kind
    #[serde(skip_serializing_if = "BTreeSet::is_empty", default)]
    pub imports: BTreeSet<String>,

    /// Per-member parameters in declaration order
    pub params: Vec<ElementParams>,

    /// Enumeration-scoped version, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,

    /// Enumeration-scoped deprecation flag, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
}

/// Transforms enumeration models into generation records
///
/// Holds no state beyond the destination package name. `transform` never
/// mutates its input and is deterministic, so a single transformer can be
/// shared across threads for independent enumerations.
#[derive(Debug, Clone)]
pub struct EnumTransformer {
    package_name: String,
}

impl EnumTransformer {
    /// Create a transformer emitting records for the given package
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }

    /// The configured destination package
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Produce the generation record for one enumeration
    pub fn transform(&self, model: &EnumModel) -> GenerationRecord {
        let has_explicit_value = model.elements.values().any(|e| e.value.is_some());
        let needs_mapping = model.elements.values().any(needs_mapping);

        // An explicit backing value supersedes string-lookup representation,
        // even when another member also triggers a mapping rule.
        let kind = if has_explicit_value {
            Kind::Complex
        } else if needs_mapping {
            Kind::Custom
        } else {
            Kind::Simple
        };

        debug!(
            enum_name = %model.name,
            %kind,
            has_explicit_value,
            needs_mapping,
            "classified enumeration"
        );

        let return_type = match kind {
            Kind::Complex => "int",
            Kind::Custom | Kind::Simple => "String",
        };

        let mut imports = BTreeSet::new();
        if kind != Kind::Simple {
            imports.insert(ENUM_SET_IMPORT.to_string());
        }

        let params = model
            .elements
            .values()
            .map(|element| self.element_params(&model.name, element, kind))
            .collect();

        GenerationRecord {
            kind,
            return_type: return_type.to_string(),
            package_name: self.package_name.clone(),
            class_name: model.name.clone(),
            imports,
            params,
            since: model.since.clone(),
            deprecated: model.deprecated,
        }
    }

    fn element_params(&self, class_name: &str, element: &EnumElement, kind: Kind) -> ElementParams {
        // The internal literal always quotes the origin, never the override
        // or the derived identifier; generated code recovers the exact wire
        // string through it.
        let internal = match kind {
            Kind::Simple => None,
            Kind::Custom | Kind::Complex => Some(format!("\"{}\"", element.name)),
        };

        ElementParams {
            name: derive_identifier(class_name, element),
            origin: element.name.clone(),
            internal,
            value: element.value,
            since: element.since.clone(),
            deprecated: element.deprecated,
            description: element.description.clone(),
        }
    }
}

/// Whether a member forces the enumeration into lookup-table representation
///
/// True when the schema author called out special handling via
/// `internal_name`, or when the origin cannot stand as a bare identifier
/// (leading digit, or any character outside `[A-Za-z0-9_]`).
fn needs_mapping(element: &EnumElement) -> bool {
    element.internal_name.is_some()
        || starts_with_digit(&element.name)
        || !element.name.chars().all(is_identifier_char)
}

/// Derive the generation-safe constant identifier for one member
///
/// Starts from `internal_name` when present, strips a single redundant
/// `<ClassName>_` prefix, and underscore-prefixes a leading digit. Any other
/// illegal character is deliberately left in place; residual sanitization is
/// the renderer's contract (see `render`).
fn derive_identifier(class_name: &str, element: &EnumElement) -> String {
    let base = element
        .internal_name
        .as_deref()
        .unwrap_or(element.name.as_str());

    let prefix = format!("{class_name}_");
    let stripped = base.strip_prefix(&prefix).unwrap_or(base);

    if starts_with_digit(stripped) {
        format!("_{stripped}")
    } else {
        stripped.to_string()
    }
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
