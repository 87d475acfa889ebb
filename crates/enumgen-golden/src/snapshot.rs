//! Snapshot management for golden tests
//!
//! Snapshots are stored as plain source files (`<category>/<name>.java`)
//! with a JSON metadata sidecar next to each one.

use crate::{GoldenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A snapshot containing the expected generated source
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Name of the test
    pub name: String,

    /// Snapshot metadata
    pub metadata: SnapshotMetadata,

    /// The expected source text
    pub source: String,
}

/// Metadata about a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Version of the snapshot format
    pub version: String,

    /// When the snapshot was created
    pub created_at: String,

    /// When the snapshot was last updated
    pub updated_at: String,

    /// Description of what this tests
    #[serde(default)]
    pub description: Option<String>,
}

impl SnapshotMetadata {
    fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }
}

/// Manages reading and writing snapshots
pub struct SnapshotManager {
    snapshot_dir: PathBuf,
}

impl SnapshotManager {
    /// Create a new snapshot manager
    pub fn new(snapshot_dir: impl AsRef<Path>) -> Self {
        Self {
            snapshot_dir: snapshot_dir.as_ref().to_path_buf(),
        }
    }

    /// Whether a snapshot exists for the given name
    pub fn exists(&self, name: &str) -> bool {
        self.snapshot_path(name).exists()
    }

    /// Load a snapshot from disk
    pub fn load(&self, name: &str) -> Result<Snapshot> {
        let path = self.snapshot_path(name);

        if !path.exists() {
            return Err(GoldenError::CorpusError(format!(
                "Snapshot '{}' not found at {}",
                name,
                path.display()
            )));
        }

        let source = fs::read_to_string(&path)?;
        let metadata = match fs::read_to_string(self.metadata_path(name)) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(_) => SnapshotMetadata {
                version: "1".to_string(),
                created_at: String::new(),
                updated_at: String::new(),
                description: None,
            },
        };

        Ok(Snapshot {
            name: name.to_string(),
            metadata,
            source,
        })
    }

    /// Save a snapshot to disk, creating or refreshing its metadata sidecar
    pub fn save(&self, name: &str, source: &str, description: Option<&str>) -> Result<()> {
        let path = self.snapshot_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let metadata = match self.load(name) {
            Ok(existing) => SnapshotMetadata {
                updated_at: SnapshotMetadata::now(),
                ..existing.metadata
            },
            Err(_) => SnapshotMetadata {
                version: "1".to_string(),
                created_at: SnapshotMetadata::now(),
                updated_at: SnapshotMetadata::now(),
                description: description.map(String::from),
            },
        };

        fs::write(&path, source)?;
        fs::write(
            self.metadata_path(name),
            serde_json::to_string_pretty(&metadata)?,
        )?;
        Ok(())
    }

    /// Path of the snapshot source file
    pub fn snapshot_path(&self, name: &str) -> PathBuf {
        self.snapshot_dir.join(format!("{name}.java"))
    }

    fn metadata_path(&self, name: &str) -> PathBuf {
        self.snapshot_dir.join(format!("{name}.meta.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SnapshotManager::new(dir.path());

        manager
            .save("simple/result", "public enum Result {}\n", Some("simple"))
            .unwrap();
        assert!(manager.exists("simple/result"));

        let snapshot = manager.load("simple/result").unwrap();
        assert_eq!(snapshot.source, "public enum Result {}\n");
        assert_eq!(snapshot.metadata.description.as_deref(), Some("simple"));
    }

    #[test]
    fn test_update_keeps_created_at() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SnapshotManager::new(dir.path());

        manager.save("simple/result", "v1\n", None).unwrap();
        let created = manager.load("simple/result").unwrap().metadata.created_at;
        manager.save("simple/result", "v2\n", None).unwrap();

        let snapshot = manager.load("simple/result").unwrap();
        assert_eq!(snapshot.source, "v2\n");
        assert_eq!(snapshot.metadata.created_at, created);
    }

    #[test]
    fn test_load_missing_snapshot_errors() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SnapshotManager::new(dir.path());
        assert!(manager.load("simple/missing").is_err());
    }
}
