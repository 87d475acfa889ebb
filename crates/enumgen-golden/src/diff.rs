//! Line diff for comparing generated source against snapshots

use colored::*;
use similar::{ChangeTag, TextDiff};

/// Options for diff output
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Whether to use colored output
    pub colored: bool,

    /// Maximum diff lines to show (0 = unlimited)
    pub max_diff_lines: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            colored: true,
            max_diff_lines: 100,
        }
    }
}

/// Result of a diff operation
#[derive(Debug)]
pub struct DiffResult {
    /// Whether the texts match
    pub matches: bool,

    /// Human-readable diff output
    pub diff_output: String,

    /// Number of added lines
    pub added: usize,

    /// Number of removed lines
    pub removed: usize,
}

/// Compares snapshot and generated text
pub struct DiffEngine {
    options: DiffOptions,
}

impl DiffEngine {
    /// Create a diff engine with the given options
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    /// Compare expected (snapshot) against actual (generated) text
    pub fn compare(&self, expected: &str, actual: &str) -> DiffResult {
        if expected == actual {
            return DiffResult {
                matches: true,
                diff_output: String::new(),
                added: 0,
                removed: 0,
            };
        }

        let diff = TextDiff::from_lines(expected, actual);
        let mut output = String::new();
        let mut added = 0;
        let mut removed = 0;
        let mut shown = 0;

        for change in diff.iter_all_changes() {
            let (sign, line) = match change.tag() {
                ChangeTag::Delete => {
                    removed += 1;
                    ("-", change.to_string())
                }
                ChangeTag::Insert => {
                    added += 1;
                    ("+", change.to_string())
                }
                ChangeTag::Equal => (" ", change.to_string()),
            };

            if self.options.max_diff_lines > 0 && shown >= self.options.max_diff_lines {
                continue;
            }
            shown += 1;

            let rendered = format!("{sign}{line}");
            if self.options.colored {
                match change.tag() {
                    ChangeTag::Delete => output.push_str(&rendered.red().to_string()),
                    ChangeTag::Insert => output.push_str(&rendered.green().to_string()),
                    ChangeTag::Equal => output.push_str(&rendered),
                }
            } else {
                output.push_str(&rendered);
            }
        }

        if self.options.max_diff_lines > 0 && shown >= self.options.max_diff_lines {
            output.push_str("... (diff truncated)\n");
        }

        DiffResult {
            matches: false,
            diff_output: output,
            added,
            removed,
        }
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new(DiffOptions::default())
    }
}
