//! # basic-lint-core
//!
//! Core of a recursive text-file linter.
//!
//! This crate walks a file or directory tree, skips paths by suffix and
//! checks every remaining file for three line-level conventions:
//!
//! - line endings (`\n`, or `\r\n` for files matching a windows suffix)
//! - trailing whitespace
//! - exactly one trailing newline at end of file
//!
//! In fix mode the violations are corrected in place instead of reported.
//!
//! The main pieces are:
//!
//! - [`SuffixSet`] for bounded-time suffix matching
//! - [`scan`] for the pure per-file line scanner
//! - [`Walker`] for traversal, ignore pruning and result aggregation
//!
//! ## Example
//!
//! ```no_run
//! use basic_lint_core::{LintConfig, Walker};
//!
//! let config = LintConfig::builder()
//!     .common()
//!     .ignore("/build/")
//!     .build();
//!
//! let result = Walker::new(&config).walk("./")?;
//! for report in &result.reports {
//!     println!("{}: {}", report.path, report.descriptions().join(", "));
//! }
//! # Ok::<(), basic_lint_core::WalkError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod linter;
mod presets;
mod scan;
mod suffix;
mod types;
mod walker;

/// Path normalization helpers.
pub mod paths;

pub use config::{ConfigError, LintConfig, LintConfigBuilder, Profile};
pub use linter::{lint_file, FileError, FileOutcome};
pub use presets::{common_profile, COMMON_IGNORE, COMMON_WINDOWS};
pub use scan::{scan, Scan};
pub use suffix::SuffixSet;
pub use types::{FileReport, LineEnding, LintResult, LintViolation};
pub use walker::{WalkError, Walker};
