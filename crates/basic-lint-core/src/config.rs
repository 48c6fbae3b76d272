//! Configuration types for basic-lint.
//!
//! A [`Profile`] is the on-disk TOML form. Profiles, command-line
//! suffixes and the common preset are merged by [`LintConfigBuilder`]
//! into one immutable [`LintConfig`] before any walk starts.

use crate::presets::common_profile;
use crate::suffix::SuffixSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A TOML profile.
///
/// ```toml
/// ignore = ["/target/", ".lock"]
/// windows = [".ps1"]
/// add = [".log"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Suffixes to ignore.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,

    /// Suffixes whose files use `\r\n` line endings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub windows: Vec<String>,

    /// Suffixes to take back out of the ignore list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<String>,
}

impl Profile {
    /// Loads a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses a profile from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Resolved configuration for one run.
#[derive(Debug, Clone, Default)]
pub struct LintConfig {
    /// Paths ending in one of these are skipped, directories with their subtree.
    pub ignore: SuffixSet,
    /// Files ending in one of these expect `\r\n` line endings.
    pub windows: SuffixSet,
    /// Skip files that are not valid UTF-8 instead of reporting them.
    pub skip_binary: bool,
    /// Rewrite files instead of reporting violations.
    pub fix: bool,
}

impl LintConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> LintConfigBuilder {
        LintConfigBuilder::new()
    }
}

/// Builder for a [`LintConfig`].
///
/// Removals from the ignore list are applied after every addition, so
/// `-a .log` takes `.log` out of the common profile no matter which was
/// given first.
#[derive(Debug, Default)]
pub struct LintConfigBuilder {
    ignore: BTreeSet<String>,
    unignore: Vec<String>,
    windows: BTreeSet<String>,
    skip_binary: bool,
    fix: bool,
}

impl LintConfigBuilder {
    /// Creates a new builder with nothing ignored.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ignore suffix.
    #[must_use]
    pub fn ignore(mut self, suffix: impl Into<String>) -> Self {
        self.ignore.insert(suffix.into());
        self
    }

    /// Adds multiple ignore suffixes.
    #[must_use]
    pub fn ignores<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(suffixes.into_iter().map(Into::into));
        self
    }

    /// Removes a suffix from the final ignore list.
    #[must_use]
    pub fn unignore(mut self, suffix: impl Into<String>) -> Self {
        self.unignore.push(suffix.into());
        self
    }

    /// Removes multiple suffixes from the final ignore list.
    #[must_use]
    pub fn unignores<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unignore.extend(suffixes.into_iter().map(Into::into));
        self
    }

    /// Adds a windows line-ending suffix.
    #[must_use]
    pub fn windows(mut self, suffix: impl Into<String>) -> Self {
        self.windows.insert(suffix.into());
        self
    }

    /// Adds multiple windows line-ending suffixes.
    #[must_use]
    pub fn windows_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.windows.extend(suffixes.into_iter().map(Into::into));
        self
    }

    /// Merges a profile.
    #[must_use]
    pub fn profile(self, profile: &Profile) -> Self {
        self.ignores(profile.ignore.iter().cloned())
            .windows_suffixes(profile.windows.iter().cloned())
            .unignores(profile.add.iter().cloned())
    }

    /// Merges the built-in common profile.
    #[must_use]
    pub fn common(self) -> Self {
        self.profile(&common_profile())
    }

    /// Sets whether undecodable files are skipped (default: false).
    #[must_use]
    pub fn skip_binary(mut self, skip: bool) -> Self {
        self.skip_binary = skip;
        self
    }

    /// Sets fix mode (default: false).
    #[must_use]
    pub fn fix(mut self, fix: bool) -> Self {
        self.fix = fix;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> LintConfig {
        let mut ignore = self.ignore;
        for suffix in &self.unignore {
            if !ignore.remove(suffix) {
                warn!("Suffix {suffix:?} is not in the ignore list");
            }
        }

        LintConfig {
            ignore: SuffixSet::new(ignore),
            windows: SuffixSet::new(self.windows),
            skip_binary: self.skip_binary,
            fix: self.fix,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading a profile.
    #[error("Failed to read profile {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in a profile.
    #[error("Failed to parse profile: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
