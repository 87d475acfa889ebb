//! Golden test runner: generate source for every corpus case and compare
//! it against the stored snapshot

use crate::{
    corpus::{CorpusManager, TestCase},
    diff::DiffEngine,
    snapshot::SnapshotManager,
    GoldenConfig, GoldenError, Result,
};
use colored::*;
use enumgen_core::{EnumTransformer, JavaRenderer};
use std::time::Instant;

/// Result of running a golden test
#[derive(Debug)]
pub struct TestResult {
    /// Name of the test
    pub name: String,

    /// Whether the test passed
    pub passed: bool,

    /// Error message if failed
    pub error: Option<String>,

    /// Diff output if comparison failed
    pub diff: Option<String>,

    /// Execution time in milliseconds
    pub duration_ms: u64,

    /// Whether the snapshot was created or updated
    pub updated: bool,
}

impl TestResult {
    /// Print the test result
    pub fn print(&self, verbose: bool) {
        let status = if self.passed {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };

        println!("{} {} ({}ms)", status, self.name, self.duration_ms);

        if let Some(ref error) = self.error {
            println!("  {}: {}", "Error".red(), error);
        }

        if verbose || !self.passed {
            if let Some(ref diff) = self.diff {
                println!("{diff}");
            }
        }

        if self.updated {
            println!("  {}", "Snapshot updated".yellow());
        }
    }
}

/// Runner for golden tests
pub struct GoldenTestRunner {
    config: GoldenConfig,
    corpus_manager: CorpusManager,
    snapshot_manager: SnapshotManager,
    diff_engine: DiffEngine,
}

impl GoldenTestRunner {
    /// Create a new test runner
    pub fn new(config: GoldenConfig) -> Self {
        let corpus_manager = CorpusManager::new(&config.corpus_dir);
        let snapshot_manager = SnapshotManager::new(&config.snapshot_dir);
        let diff_engine = DiffEngine::new(config.diff_options.clone());

        Self {
            config,
            corpus_manager,
            snapshot_manager,
            diff_engine,
        }
    }

    /// Run every enabled test in the corpus
    pub fn run_all(&self) -> Result<Vec<TestResult>> {
        let tests = self.corpus_manager.discover_tests()?;
        if tests.is_empty() {
            return Err(GoldenError::CorpusError(format!(
                "No test cases found under {}",
                self.config.corpus_dir.display()
            )));
        }

        let mut results = Vec::new();
        let mut failed = 0;

        for test_case in &tests {
            let result = self.run_case(test_case);
            if !result.passed {
                failed += 1;
            }
            result.print(self.config.verbose);
            results.push(result);
        }

        println!(
            "\n{}: {} passed, {} failed",
            "Golden results".bold(),
            (results.len() - failed).to_string().green(),
            failed.to_string().red()
        );

        if failed > 0 {
            Err(GoldenError::TestFailed(format!("{failed} test(s) failed")))
        } else {
            Ok(results)
        }
    }

    /// Run a single corpus case
    pub fn run_case(&self, test_case: &TestCase) -> TestResult {
        let start = Instant::now();
        let name = test_case.snapshot_name();

        let outcome = self.execute(test_case);
        let duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok((passed, diff, updated)) => TestResult {
                name,
                passed,
                error: if passed {
                    None
                } else {
                    Some("Snapshot mismatch".to_string())
                },
                diff,
                duration_ms,
                updated,
            },
            Err(e) => TestResult {
                name,
                passed: false,
                error: Some(e.to_string()),
                diff: None,
                duration_ms,
                updated: false,
            },
        }
    }

    fn execute(&self, test_case: &TestCase) -> Result<(bool, Option<String>, bool)> {
        if !test_case.metadata.enabled {
            return Ok((true, None, false));
        }

        let transformer = EnumTransformer::new(&test_case.package);
        let record = transformer.transform(&test_case.model);
        let actual = JavaRenderer::new().render(&record)?;

        let name = test_case.snapshot_name();

        if !self.snapshot_manager.exists(&name) {
            if self.config.create_missing {
                self.snapshot_manager.save(
                    &name,
                    &actual,
                    Some(test_case.metadata.description.as_str()),
                )?;
                return Ok((true, None, true));
            }
            return Err(GoldenError::CorpusError(format!(
                "Missing snapshot for '{name}' (set UPDATE_GOLDEN=1 to create)"
            )));
        }

        let snapshot = self.snapshot_manager.load(&name)?;
        let diff = self.diff_engine.compare(&snapshot.source, &actual);

        if diff.matches {
            return Ok((true, None, false));
        }

        if self.config.update_snapshots {
            self.snapshot_manager
                .save(&name, &actual, Some(test_case.metadata.description.as_str()))?;
            return Ok((true, None, true));
        }

        Ok((false, Some(diff.diff_output), false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumgen_core::{EnumElement, EnumModel};

    fn case(dir: &std::path::Path) -> (GoldenConfig, TestCase) {
        let config = GoldenConfig {
            corpus_dir: dir.join("corpus"),
            snapshot_dir: dir.join("snapshots"),
            update_snapshots: false,
            create_missing: true,
            diff_options: crate::DiffOptions {
                colored: false,
                max_diff_lines: 0,
            },
            verbose: false,
        };

        let test_case = TestCase {
            name: "button".to_string(),
            category: "simple".to_string(),
            package: "com.example.api.enums".to_string(),
            model: EnumModel::new("ButtonName").with_element(EnumElement::new("OK")),
            metadata: Default::default(),
        };

        (config, test_case)
    }

    #[test]
    fn test_case_creates_then_matches_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let (config, test_case) = case(dir.path());
        let runner = GoldenTestRunner::new(config);

        let first = runner.run_case(&test_case);
        assert!(first.passed, "{:?}", first.error);
        assert!(first.updated);

        let second = runner.run_case(&test_case);
        assert!(second.passed);
        assert!(!second.updated);
    }

    #[test]
    fn test_changed_output_fails_against_stale_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let (config, mut test_case) = case(dir.path());
        let runner = GoldenTestRunner::new(config);

        assert!(runner.run_case(&test_case).passed);

        // Same snapshot name, different model content.
        test_case.model = EnumModel::new("ButtonName").with_element(EnumElement::new("CANCEL"));
        let result = runner.run_case(&test_case);
        assert!(!result.passed);
        assert!(result.diff.unwrap().contains("+    CANCEL,"));
    }
}
