//! Interface-definition loading
//!
//! Parses an already-abstract interface definition (JSON or YAML) into the
//! [`InterfaceModel`] the transformer consumes. Deliberately thin: structure
//! is checked by serde, schema correctness is the producing tool's problem.

use crate::error::{Error, Result};
use crate::model::InterfaceModel;
use std::path::Path;
use tracing::debug;

/// Supported interface-definition file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml)
    Yaml,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
                extensions: "json, yaml, yml".to_string(),
            }),
        }
    }
}

/// Loads interface definitions from disk or from in-memory content
#[derive(Debug, Clone, Default)]
pub struct InterfaceLoader;

impl InterfaceLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a definition file, detecting the format from its extension
    pub fn load_file(&self, path: &Path) -> Result<InterfaceModel> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), ?format, bytes = content.len(), "read interface definition");
        self.parse(&content, format, path)
    }

    /// Parse definition content with an explicit format
    pub fn parse(&self, content: &str, format: Format, path: &Path) -> Result<InterfaceModel> {
        let model: InterfaceModel = match format {
            Format::Json => serde_json::from_str(content).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
                source: Some(e.into()),
            })?,
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
                source: Some(e.into()),
            })?,
        };

        debug!(enums = model.enums.len(), "parsed interface definition");
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            Format::from_path(Path::new("api.json")).unwrap(),
            Format::Json
        );
        assert_eq!(
            Format::from_path(Path::new("api.YAML")).unwrap(),
            Format::Yaml
        );
        assert!(Format::from_path(Path::new("api.xml")).is_err());
        assert!(Format::from_path(Path::new("api")).is_err());
    }

    #[test]
    fn test_parse_json_definition() {
        let content = r#"{
            "enums": [
                {
                    "name": "Result",
                    "elements": {
                        "SUCCESS": { "name": "SUCCESS" }
                    }
                }
            ]
        }"#;

        let model = InterfaceLoader::new()
            .parse(content, Format::Json, &PathBuf::from("api.json"))
            .unwrap();
        assert_eq!(model.enums.len(), 1);
        assert_eq!(model.enums[0].name, "Result");
    }

    #[test]
    fn test_parse_yaml_definition() {
        let content = "\
enums:
  - name: SamplingRate
    elements:
      8KHZ:
        name: 8KHZ
        internal_name: SamplingRate_8KHZ
";

        let model = InterfaceLoader::new()
            .parse(content, Format::Yaml, &PathBuf::from("api.yaml"))
            .unwrap();
        assert_eq!(model.enums[0].elements["8KHZ"].name, "8KHZ");
    }

    #[test]
    fn test_parse_error_carries_path() {
        let err = InterfaceLoader::new()
            .parse("{ not json", Format::Json, &PathBuf::from("broken.json"))
            .unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.json");
        std::fs::write(&path, r#"{ "enums": [] }"#).unwrap();

        let model = InterfaceLoader::new().load_file(&path).unwrap();
        assert!(model.enums.is_empty());
    }
}
