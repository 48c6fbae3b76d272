//! Core types for lint violations and results.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Line terminator convention expected for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    Unix,
    /// `\r\n`
    Windows,
}

impl LineEnding {
    /// Picks the convention from a windows-suffix match.
    #[must_use]
    pub fn from_windows(windows: bool) -> Self {
        if windows {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// The terminator itself.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unix => "\n",
            Self::Windows => "\r\n",
        }
    }

    /// The terminator spelled with escapes, for messages.
    #[must_use]
    pub fn escaped(self) -> &'static str {
        match self {
            Self::Unix => "\\n",
            Self::Windows => "\\r\\n",
        }
    }
}

/// A line-level defect found in a text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LintViolation {
    /// A line ends with the wrong terminator.
    LineEndingMismatch {
        /// The terminator the file should use.
        expected: LineEnding,
    },
    /// Whitespace before a line terminator.
    TrailingWhitespace,
    /// The last line has no terminator.
    MissingTrailingNewline,
    /// The file ends with blank lines.
    ExcessTrailingNewlines,
}

impl LintViolation {
    /// Human-readable description shown in reports.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::LineEndingMismatch { expected } => {
                format!("Line Ending (Expected {})", expected.escaped())
            }
            Self::TrailingWhitespace => "Trailing Whitespace".to_string(),
            Self::MissingTrailingNewline => "Needs trailing new line".to_string(),
            Self::ExcessTrailingNewlines => "Too many trailing new lines".to_string(),
        }
    }
}

impl std::fmt::Display for LintViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

/// Findings for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path relative to the input, `/`-separated.
    pub path: String,
    /// Violations in discovery order.
    #[serde(default, skip_serializing_if = "IndexSet::is_empty")]
    pub violations: IndexSet<LintViolation>,
    /// Error that stopped this file from being linted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    /// Creates a report listing violations.
    #[must_use]
    pub fn violations(path: impl Into<String>, violations: IndexSet<LintViolation>) -> Self {
        Self {
            path: path.into(),
            violations,
            error: None,
        }
    }

    /// Creates a report for a file that could not be linted.
    #[must_use]
    pub fn error(path: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            path: path.into(),
            violations: IndexSet::new(),
            error: Some(error.to_string()),
        }
    }

    /// All entries for this file as display strings.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .violations
            .iter()
            .map(LintViolation::description)
            .collect();
        if let Some(error) = &self.error {
            out.push(error.clone());
        }
        out
    }
}

/// Result of linting one or more trees.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// Files with violations or errors, in discovery order.
    pub reports: Vec<FileReport>,
    /// Number of files scanned.
    pub files_checked: usize,
    /// Number of files rewritten by fix mode.
    pub files_fixed: usize,
    /// Number of read-only or binary files that were passed over.
    pub files_skipped: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no file has anything to report.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.reports.is_empty()
    }

    /// Total number of violations across all files.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.reports.iter().map(|r| r.violations.len()).sum()
    }

    /// Number of files that could not be linted.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.reports.iter().filter(|r| r.error.is_some()).count()
    }

    /// Adds reports and counters from another result.
    pub fn extend(&mut self, other: Self) {
        self.reports.extend(other.reports);
        self.files_checked += other.files_checked;
        self.files_fixed += other.files_fixed;
        self.files_skipped += other.files_skipped;
    }
}
