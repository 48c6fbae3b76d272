//! Path utilities for suffix matching.
//!
//! Suffix rules are evaluated against a canonical string form of each
//! path: `/`-separated, directories always ending in `/`, files never.

use std::path::Path;

/// Normalizes a user-supplied input path to the `./`-rooted form.
///
/// Backslashes become `/`, `.` becomes `./` and relative paths gain a
/// `./` prefix. Absolute paths keep their root.
///
/// # Examples
///
/// ```
/// use basic_lint_core::paths::normalize_input;
///
/// assert_eq!(normalize_input("."), "./");
/// assert_eq!(normalize_input("src\\lib"), "./src/lib");
/// assert_eq!(normalize_input("./docs"), "./docs");
/// assert_eq!(normalize_input("/tmp/x"), "/tmp/x");
/// ```
#[must_use]
pub fn normalize_input(input: &str) -> String {
    let path = input.replace('\\', "/");
    if path == "." {
        return "./".to_string();
    }
    if path.starts_with("./") || is_absolute(&path) {
        return path;
    }
    format!("./{path}")
}

fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || Path::new(path).is_absolute()
}

/// Canonical form of a filesystem path for suffix matching.
#[must_use]
pub fn canonical(path: &Path, is_dir: bool) -> String {
    let mut s = path.to_string_lossy().replace('\\', "/");
    if is_dir {
        if !s.ends_with('/') {
            s.push('/');
        }
    } else {
        let trimmed = s.trim_end_matches('/').len();
        s.truncate(trimmed);
    }
    s
}

/// Drops trailing separators from a root that names a regular file.
///
/// `foo.txt/` cannot be opened on most platforms, so the separator is
/// removed before walking. Directory roots are returned unchanged.
#[must_use]
pub fn strip_file_separator(root: &str) -> &str {
    let trimmed = root.trim_end_matches('/');
    if trimmed.len() != root.len() && !trimmed.is_empty() && Path::new(trimmed).is_file() {
        trimmed
    } else {
        root
    }
}
