//! Golden tests for generated Java source
//!
//! Runs the corpus under `golden-corpus/` at the workspace root through
//! the full transform + render pipeline and compares the output against
//! the stored snapshots. Set UPDATE_GOLDEN=1 to refresh snapshots.

use enumgen_golden::{GoldenConfig, GoldenTestRunner};

#[test]
fn golden_corpus_matches_snapshots() {
    let config = GoldenConfig::from_env();
    if !config.corpus_dir.exists() {
        eprintln!(
            "Skipping golden tests: corpus not found at {}",
            config.corpus_dir.display()
        );
        return;
    }

    let runner = GoldenTestRunner::new(config);
    let results = runner.run_all().expect("golden corpus run failed");
    assert!(results.iter().all(|r| r.passed));
}
