//! Test corpus management for golden tests

use crate::{GoldenError, Result};
use enumgen_core::EnumModel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A test case in the corpus: one enumeration model plus the package the
/// generated class belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// Name of the test case
    pub name: String,

    /// Category/group of the test (typically the expected kind)
    pub category: String,

    /// Destination package for the generated class
    pub package: String,

    /// The enumeration model under test
    #[serde(rename = "enum")]
    pub model: EnumModel,

    /// Test metadata
    #[serde(default)]
    pub metadata: TestMetadata,
}

/// Metadata about a test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestMetadata {
    /// Description of what this tests
    #[serde(default)]
    pub description: String,

    /// Whether this test is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for TestMetadata {
    fn default() -> Self {
        Self {
            description: String::new(),
            enabled: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl TestCase {
    /// Snapshot identifier for this case
    pub fn snapshot_name(&self) -> String {
        format!("{}/{}", self.category, self.name)
    }
}

/// Manages the test corpus
pub struct CorpusManager {
    corpus_dir: PathBuf,
}

impl CorpusManager {
    /// Create a new corpus manager
    pub fn new(corpus_dir: impl AsRef<Path>) -> Self {
        Self {
            corpus_dir: corpus_dir.as_ref().to_path_buf(),
        }
    }

    /// Discover all test cases in the corpus
    pub fn discover_tests(&self) -> Result<Vec<TestCase>> {
        let mut tests = Vec::new();

        if !self.corpus_dir.exists() {
            return Ok(tests);
        }

        for entry in WalkDir::new(&self.corpus_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.file_name() == "test.json")
        {
            tests.push(self.load_test_case(entry.path())?);
        }

        tests.sort_by(|a, b| a.snapshot_name().cmp(&b.snapshot_name()));
        Ok(tests)
    }

    /// Load a single test case file
    pub fn load_test_case(&self, path: &Path) -> Result<TestCase> {
        let content = fs::read_to_string(path)?;
        let test_case: TestCase = serde_json::from_str(&content).map_err(|e| {
            GoldenError::CorpusError(format!("Invalid test case {}: {}", path.display(), e))
        })?;
        Ok(test_case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_deserializes_from_corpus_json() {
        let json = r#"{
            "name": "language",
            "category": "custom",
            "package": "com.example.api.enums",
            "enum": {
                "name": "Language",
                "elements": {
                    "EN-US": { "name": "EN-US", "internal_name": "EN-US" }
                }
            },
            "metadata": { "description": "hyphenated wire strings" }
        }"#;

        let case: TestCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.snapshot_name(), "custom/language");
        assert_eq!(case.model.name, "Language");
        assert!(case.metadata.enabled);
    }

    #[test]
    fn test_discovery_on_missing_dir_is_empty() {
        let manager = CorpusManager::new("does-not-exist");
        assert!(manager.discover_tests().unwrap().is_empty());
    }
}
