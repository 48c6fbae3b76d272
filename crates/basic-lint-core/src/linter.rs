//! Per-file linting: reading, scanning and atomic fix write-back.

use crate::scan::scan;
use crate::types::{LineEnding, LintViolation};
use indexmap::IndexSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

/// Errors that stop a single file from being linted.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be read.
    #[error("Failed to read file: {0}")]
    Read(#[source] io::Error),

    /// The file is not valid UTF-8.
    #[error("Not valid UTF-8 (binary file?): {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// The fixed contents could not be written back.
    #[error("Failed to write fix: {0}")]
    Write(#[source] io::Error),
}

/// What happened to a file handed to [`lint_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Scanned in report mode; an empty set means the file is clean.
    Checked(IndexSet<LintViolation>),
    /// Scanned in fix mode; `changed` tells whether the file was rewritten.
    Fixed {
        /// Whether the contents differed and were written back.
        changed: bool,
    },
    /// Passed over because it is not writable.
    ReadOnly,
}

/// Lints one file on disk.
///
/// Read-only files are never scanned. In fix mode the corrected text
/// replaces the file through a temporary file in the same directory, and
/// only when it differs from what is on disk.
///
/// # Errors
///
/// Returns [`FileError::Decode`] for non-UTF-8 contents and an I/O
/// variant when reading or writing fails.
pub fn lint_file(path: &Path, ending: LineEnding, fix: bool) -> Result<FileOutcome, FileError> {
    let metadata = fs::metadata(path).map_err(FileError::Read)?;
    if !is_writable(path, &metadata).map_err(FileError::Read)? {
        debug!("Ignoring read-only file {}", path.display());
        return Ok(FileOutcome::ReadOnly);
    }

    debug!("Checking {}", path.display());
    let bytes = fs::read(path).map_err(FileError::Read)?;
    let text = String::from_utf8(bytes)?;

    let result = scan(&text, ending, fix);
    match result.fixed {
        Some(fixed) => {
            let changed = fixed != text;
            if changed {
                write_atomic(path, &fixed, metadata.permissions()).map_err(FileError::Write)?;
                debug!("Fixed {}", path.display());
            }
            Ok(FileOutcome::Fixed { changed })
        }
        None => Ok(FileOutcome::Checked(result.violations)),
    }
}

/// Whether the current user may write `path`.
///
/// The mode bits alone are not enough: a file owned by someone else can
/// have write bits set and still be off limits, while the rename in
/// [`write_atomic`] would only need a writable parent directory.
fn is_writable(path: &Path, metadata: &fs::Metadata) -> io::Result<bool> {
    if metadata.permissions().readonly() {
        return Ok(false);
    }
    match OpenOptions::new().write(true).open(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => Ok(false),
        Err(e) => Err(e),
    }
}

/// Replaces `path` with `contents` via rename, keeping permissions.
fn write_atomic(path: &Path, contents: &str, permissions: fs::Permissions) -> io::Result<()> {
    // Write through symlinks instead of replacing them.
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    fs::set_permissions(tmp.path(), permissions)?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reports_violations_without_touching_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.txt", b"foo \nbar\n");

        let outcome = lint_file(&path, LineEnding::Unix, false).unwrap();
        let FileOutcome::Checked(violations) = outcome else {
            panic!("expected report outcome");
        };
        assert_eq!(
            violations.into_iter().collect::<Vec<_>>(),
            vec![LintViolation::TrailingWhitespace]
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "foo \nbar\n");
    }

    #[test]
    fn fix_rewrites_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.txt", b"foo\r\nbar  \n\n\n");

        let outcome = lint_file(&path, LineEnding::Unix, true).unwrap();
        assert_eq!(outcome, FileOutcome::Fixed { changed: true });
        assert_eq!(fs::read_to_string(&path).unwrap(), "foo\nbar\n");

        let again = lint_file(&path, LineEnding::Unix, true).unwrap();
        assert_eq!(again, FileOutcome::Fixed { changed: false });
    }

    #[test]
    fn fix_uses_windows_endings() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "run.bat", b"echo hi\necho bye");

        lint_file(&path, LineEnding::Windows, true).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "echo hi\r\necho bye\r\n"
        );
    }

    #[test]
    fn read_only_file_is_skipped_even_in_fix_mode() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "locked.txt", b"foo   ");
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();

        assert_eq!(
            lint_file(&path, LineEnding::Unix, true).unwrap(),
            FileOutcome::ReadOnly
        );
        assert_eq!(
            lint_file(&path, LineEnding::Unix, false).unwrap(),
            FileOutcome::ReadOnly
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "foo   ");
    }

    #[test]
    fn binary_file_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "blob.bin", &[0xff, 0xfe, 0x00, 0x9f]);

        let err = lint_file(&path, LineEnding::Unix, false).unwrap_err();
        assert!(matches!(err, FileError::Decode(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = lint_file(&dir.path().join("gone.txt"), LineEnding::Unix, false).unwrap_err();
        assert!(matches!(err, FileError::Read(_)));
    }

    #[cfg(unix)]
    #[test]
    fn file_without_write_access_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = write(&dir, "shared.txt", b"foo \n");
        // Writable by group and others, not by the owner.
        fs::set_permissions(&path, fs::Permissions::from_mode(0o466)).unwrap();
        assert!(!fs::metadata(&path).unwrap().permissions().readonly());

        if OpenOptions::new().write(true).open(&path).is_ok() {
            // Privileged users bypass mode bits.
            return;
        }

        assert_eq!(
            lint_file(&path, LineEnding::Unix, false).unwrap(),
            FileOutcome::ReadOnly
        );
        assert_eq!(
            lint_file(&path, LineEnding::Unix, true).unwrap(),
            FileOutcome::ReadOnly
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "foo \n");
    }

    #[cfg(unix)]
    #[test]
    fn fix_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = write(&dir, "script.sh", b"echo hi \n");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        lint_file(&path, LineEnding::Unix, true).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        assert_eq!(fs::read_to_string(&path).unwrap(), "echo hi\n");
    }
}
