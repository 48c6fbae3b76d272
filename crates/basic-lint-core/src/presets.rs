//! Built-in common profile.

use crate::config::Profile;

/// Suffixes ignored by the common profile.
pub const COMMON_IGNORE: &[&str] = &[
    // Tooling directories
    "/.git/",
    "/__pycache__/",
    "/.vscode/",
    "/node_modules/",
    // Images
    ".png",
    ".gif",
    ".ico",
    ".webp",
    ".svg",
    // Binaries
    ".exe",
    ".wasm",
    ".vsix",
    // Archives
    ".zip",
    ".tar",
    ".gz",
    // Other text files
    ".log",
];

/// Suffixes that use windows line endings in the common profile.
pub const COMMON_WINDOWS: &[&str] = &[".ps1", ".bat", ".cmd"];

/// Returns the common profile enabled by `--common`.
#[must_use]
pub fn common_profile() -> Profile {
    Profile {
        ignore: COMMON_IGNORE.iter().map(ToString::to_string).collect(),
        windows: COMMON_WINDOWS.iter().map(ToString::to_string).collect(),
        add: Vec::new(),
    }
}
