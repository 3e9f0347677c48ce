//! Path canonicalization.
//!
//! Canonicalization follows every symbolic link in a path to its final
//! target, producing the "real" absolute path on the filesystem. The path
//! must exist for canonicalization to succeed; in particular, a broken
//! symlink is reported as not found rather than treated as a file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Canonicalize a path by following symlinks to the final target.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist, or a symlink in the chain is broken
///   (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Any other I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use finfo::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}
