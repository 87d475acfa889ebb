//! Configuration management for the CLI
//!
//! Configuration is merged from defaults, an optional TOML file
//! (`--config`, `ENUMGEN_CONFIG`, `./enumgen.toml`, or the user config
//! directory), and `ENUMGEN_*` environment variables, in that order.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation settings
    pub generator: GeneratorConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Destination package for generated classes
    pub package: String,

    /// Directory generated source files are written into
    pub out_dir: PathBuf,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored output by default
    pub color: bool,

    /// Default verbosity level
    pub verbosity: u8,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, full, json)
    pub format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: "com.example.api.enums".to_string(),
            out_dir: PathBuf::from("generated"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            verbosity: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl Config {
    /// Load configuration, optionally from an explicit file path
    pub fn load_with_file(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_path(explicit) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Invalid config {}: {}", path.display(), e)))
    }

    /// Resolution order: explicit flag, working directory, user config dir
    fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let local = PathBuf::from("enumgen.toml");
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join("enumgen").join("config.toml"))
            .filter(|path| path.exists())
    }

    /// Apply `ENUMGEN_*` environment overrides
    fn apply_env(&mut self) {
        if let Ok(package) = std::env::var("ENUMGEN_PACKAGE") {
            self.generator.package = package;
        }
        if let Ok(out_dir) = std::env::var("ENUMGEN_OUT_DIR") {
            self.generator.out_dir = PathBuf::from(out_dir);
        }
        if let Ok(level) = std::env::var("ENUMGEN_LOG_LEVEL") {
            self.logging.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.generator.package, "com.example.api.enums");
        assert_eq!(config.generator.out_dir, PathBuf::from("generated"));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_from_file_parses_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enumgen.toml");
        std::fs::write(
            &path,
            "[generator]\npackage = \"org.acme.rpc.enums\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.generator.package, "org.acme.rpc.enums");
        // Unspecified sections keep their defaults.
        assert_eq!(config.generator.out_dir, PathBuf::from("generated"));
        assert!(config.output.color);
    }

    #[test]
    fn test_from_missing_file_is_config_error() {
        let err = Config::from_file(Path::new("/nonexistent/enumgen.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
