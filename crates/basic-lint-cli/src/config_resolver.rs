//! Profile resolution with global fallback.
//!
//! Resolves which TOML profiles to load using a deterministic priority
//! order:
//!
//! 1. `--profile` flags (explicit paths, merged in the order given)
//! 2. `{cwd}/basic-lint.toml` or `.basic-lint.toml`
//! 3. `~/.basic-lint/config.toml` (global fallback)
//! 4. No profile found → command-line suffixes only

use std::path::{Path, PathBuf};

/// Where the profiles were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// Explicitly specified via `--profile` flags.
    Explicit(Vec<PathBuf>),
    /// Found in the working directory.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.basic-lint/`).
    Global(PathBuf),
    /// No profile found.
    None,
}

impl ProfileSource {
    /// Returns the resolved paths, in merge order.
    #[must_use]
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            Self::Explicit(paths) => paths.iter().map(PathBuf::as_path).collect(),
            Self::Project(p) | Self::Global(p) => vec![p.as_path()],
            Self::None => Vec::new(),
        }
    }

    /// Returns the profile path when it was picked up without `--profile`.
    #[must_use]
    pub fn implicit_path(&self) -> Option<&Path> {
        match self {
            Self::Project(p) | Self::Global(p) => Some(p.as_path()),
            Self::Explicit(_) | Self::None => None,
        }
    }
}

/// Project-level profile names, checked in order.
const PROJECT_PROFILE_NAMES: &[&str] = &["basic-lint.toml", ".basic-lint.toml"];

/// Profile file name within the global config directory.
const GLOBAL_PROFILE_NAME: &str = "config.toml";

/// Resolves the profiles to load.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: &[PathBuf]) -> ProfileSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

/// Testable core: accepts `global_dir` as parameter to avoid env var races.
fn resolve_inner(
    project_dir: &Path,
    explicit: &[PathBuf],
    global_dir: Option<PathBuf>,
) -> ProfileSource {
    if !explicit.is_empty() {
        return ProfileSource::Explicit(explicit.to_vec());
    }

    for name in PROJECT_PROFILE_NAMES {
        let candidate = project_dir.join(name);
        if candidate.exists() {
            tracing::debug!("Found project profile: {}", candidate.display());
            return ProfileSource::Project(candidate);
        }
    }

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_PROFILE_NAME);
        if candidate.exists() {
            tracing::debug!("Found global profile: {}", candidate.display());
            return ProfileSource::Global(candidate);
        }
    }

    ProfileSource::None
}

/// Returns the global config directory path.
///
/// Resolution: `$BASIC_LINT_CONFIG_DIR` > `~/.basic-lint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("BASIC_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".basic-lint"))
}
