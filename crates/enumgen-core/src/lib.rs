//! Enumgen Core - enum classification and parameter derivation for codegen
//!
//! This crate turns abstract interface-definition enumerations into the
//! generation records a source emitter needs to write target-language enum
//! classes.
//!
//! # Main Components
//!
//! - **Model**: immutable input types for parsed enumerations
//! - **Transform**: the classification and identifier-derivation engine
//! - **Render**: Java source emission for finished records
//! - **Loader**: JSON/YAML interface-definition parsing
//! - **Error Handling**: error types using `thiserror`
//!
//! # Example
//!
//! ```
//! use enumgen_core::{EnumElement, EnumModel, EnumTransformer, JavaRenderer, Kind};
//!
//! let transformer = EnumTransformer::new("com.example.api.enums");
//! let model = EnumModel::new("Language")
//!     .with_element(EnumElement::new("EN-US").with_internal_name("EN-US"));
//!
//! let record = transformer.transform(&model);
//! assert_eq!(record.kind, Kind::Custom);
//!
//! let source = JavaRenderer::new().render(&record).unwrap();
//! assert!(source.contains("public enum Language"));
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod render;
pub mod transform;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use loader::{Format, InterfaceLoader};
pub use model::{EnumElement, EnumModel, InterfaceModel};
pub use render::JavaRenderer;
pub use transform::{ElementParams, EnumTransformer, GenerationRecord, Kind, ENUM_SET_IMPORT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }
}
