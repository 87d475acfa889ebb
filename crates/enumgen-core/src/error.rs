//! Error types for the enumgen core library
//!
//! The transform itself is infallible; errors only arise at the I/O edges
//! (loading interface definitions, writing rendered source).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for enumgen-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Interface definition could not be parsed
    #[error("Failed to parse interface definition {}: {message}", path.display())]
    Parse {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Unsupported interface definition file format
    #[error("Unsupported file format for {}: expected one of {extensions}", path.display())]
    UnsupportedFormat { path: PathBuf, extensions: String },

    /// Rendering a generation record to source text failed
    #[error("Failed to render enum '{class_name}': {message}")]
    Render { class_name: String, message: String },

    /// JSON serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML serialization errors
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a parse error with path context
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a render error
    pub fn render(class_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            class_name: class_name.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            message: source.to_string(),
            source,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Yaml {
            message: source.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::render("Language", "missing constant body");
        assert_eq!(
            err.to_string(),
            "Failed to render enum 'Language': missing constant body"
        );
    }

    #[test]
    fn test_parse_error_includes_path() {
        let err = Error::parse("specs/mobile.json", "unexpected end of input");
        assert!(err.to_string().contains("specs/mobile.json"));
    }
}
