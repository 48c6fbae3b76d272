//! Tree walker that orchestrates lint execution.
//!
//! Discovery runs depth-first on one thread: every entry is put into
//! canonical form and checked against the ignore suffixes before its
//! subtree is read. The surviving files are then linted on the `rayon`
//! pool and folded back into a [`LintResult`] in discovery order.

use crate::config::LintConfig;
use crate::linter::{lint_file, FileError, FileOutcome};
use crate::paths::{canonical, strip_file_separator};
use crate::types::{FileReport, LineEnding, LintResult};

use miette::Diagnostic;
use rayon::prelude::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Errors that abort a whole walk.
#[derive(Debug, Error, Diagnostic)]
pub enum WalkError {
    /// The root path could not be read at all.
    #[error("Cannot lint {path}: {source}")]
    #[diagnostic(
        code(basic_lint::walk::root),
        help("check that the path exists and is readable")
    )]
    Root {
        /// The root as given.
        path: String,
        /// Underlying traversal error.
        source: walkdir::Error,
    },
}

/// A file that survived the ignore check.
#[derive(Debug)]
struct Target {
    /// Canonical display path.
    path: String,
    fs_path: PathBuf,
    ending: LineEnding,
}

/// Walks files and directories, linting every file that is not ignored.
pub struct Walker<'a> {
    config: &'a LintConfig,
}

impl<'a> Walker<'a> {
    /// Creates a walker over a resolved configuration.
    #[must_use]
    pub fn new(config: &'a LintConfig) -> Self {
        Self { config }
    }

    /// Lints every root and merges the results.
    ///
    /// # Errors
    ///
    /// Stops at the first root that cannot be read.
    pub fn walk_all<I, S>(&self, roots: I) -> Result<LintResult, WalkError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = LintResult::new();
        for root in roots {
            result.extend(self.walk(root.as_ref())?);
        }
        Ok(result)
    }

    /// Lints a single file or directory tree.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::Root`] if `root` does not exist or cannot be
    /// enumerated. Problems below the root are logged and skipped.
    pub fn walk(&self, root: &str) -> Result<LintResult, WalkError> {
        debug!("Linting {root}");
        let targets = self.discover(root)?;
        debug!("Found {} files to lint in {root}", targets.len());

        let fix = self.config.fix;
        let outcomes: Vec<(Target, Result<FileOutcome, FileError>)> = targets
            .into_par_iter()
            .map(|target| {
                let outcome = lint_file(&target.fs_path, target.ending, fix);
                (target, outcome)
            })
            .collect();

        let mut result = LintResult::new();
        for (target, outcome) in outcomes {
            match outcome {
                Ok(FileOutcome::Checked(violations)) => {
                    result.files_checked += 1;
                    if !violations.is_empty() {
                        result
                            .reports
                            .push(FileReport::violations(target.path, violations));
                    }
                }
                Ok(FileOutcome::Fixed { changed }) => {
                    result.files_checked += 1;
                    if changed {
                        result.files_fixed += 1;
                    }
                }
                Ok(FileOutcome::ReadOnly) => result.files_skipped += 1,
                Err(FileError::Decode(_)) if self.config.skip_binary => {
                    debug!("Binary: {}", target.path);
                    result.files_skipped += 1;
                }
                Err(e) => {
                    warn!("Failed to lint {}: {e}", target.path);
                    result.reports.push(FileReport::error(target.path, e));
                }
            }
        }

        Ok(result)
    }

    /// Collects the files under `root` that are not ignored.
    fn discover(&self, root: &str) -> Result<Vec<Target>, WalkError> {
        let root = strip_file_separator(root);
        let ignore = &self.config.ignore;

        let entries = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| match canonical_entry(entry) {
                Some(path) if ignore.matches(&path) => {
                    debug!("Ignoring: {path}");
                    false
                }
                _ => true,
            });

        let mut targets = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(WalkError::Root {
                        path: root.to_string(),
                        source: e,
                    });
                }
                Err(e) => {
                    if e.loop_ancestor().is_some() {
                        warn!("Skipping symlink loop: {e}");
                    } else {
                        debug!("Not file or dir: {e}");
                    }
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() {
                debug!("Not file or dir: {}", entry.path().display());
                continue;
            }

            let path = canonical(entry.path(), false);
            let ending = LineEnding::from_windows(self.config.windows.matches(&path));
            targets.push(Target {
                path,
                fs_path: entry.into_path(),
                ending,
            });
        }

        Ok(targets)
    }
}

/// Canonical form of a walk entry, `None` for anything but files and dirs.
fn canonical_entry(entry: &DirEntry) -> Option<String> {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        Some(canonical(entry.path(), true))
    } else if file_type.is_file() {
        Some(canonical(entry.path(), false))
    } else {
        None
    }
}
