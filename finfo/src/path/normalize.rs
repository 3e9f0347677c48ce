//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths against the current
//!   working directory
//!
//! Normalization is purely lexical apart from the CWD lookup; symlink
//! resolution is handled separately by [`crate::path::canonicalize`].

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user`
/// syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use finfo::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// // Expands ~ to home directory
/// let expanded = expand_tilde(Path::new("~")).unwrap();
/// assert!(expanded.is_absolute());
///
/// // Leaves paths without a tilde unchanged
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    // Get home directory using the home crate
    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        // ~user syntax not supported
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Normalize a path to absolute form.
///
/// Expands a leading tilde, then joins relative paths onto the current
/// working directory. Symlinks and `.`/`..` components are left in place
/// for canonicalization to resolve against the real filesystem.
///
/// # Errors
///
/// Returns an error if:
/// - The path is empty
/// - Tilde expansion fails
/// - The current working directory cannot be determined
///
/// # Examples
///
/// ```
/// use finfo::path::normalize::normalize;
/// use std::path::Path;
///
/// let absolute = normalize(Path::new("some/relative/path")).unwrap();
/// assert!(absolute.is_absolute());
///
/// let unchanged = normalize(Path::new("/already/absolute")).unwrap();
/// assert_eq!(unchanged, Path::new("/already/absolute"));
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "Path is empty".to_string(),
        });
    }

    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        return Ok(expanded);
    }

    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot determine current directory: {e}"),
    })?;

    Ok(cwd.join(expanded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_bare() {
        let expanded = expand_tilde(Path::new("~")).unwrap();
        assert!(expanded.is_absolute());
        assert_eq!(expanded, home::home_dir().unwrap());
    }

    #[test]
    fn test_expand_tilde_with_path() {
        let expanded = expand_tilde(Path::new("~/project")).unwrap();
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with("project"));
    }

    #[test]
    fn test_expand_tilde_no_tilde() {
        let expanded = expand_tilde(Path::new("plain/path")).unwrap();
        assert_eq!(expanded, Path::new("plain/path"));
    }

    #[test]
    fn test_expand_tilde_user_syntax_rejected() {
        let result = expand_tilde(Path::new("~someuser/project"));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::InvalidPath { .. }));
    }

    #[test]
    fn test_normalize_relative() {
        let cwd = env::current_dir().unwrap();
        let normalized = normalize(Path::new("child")).unwrap();
        assert!(normalized.is_absolute());
        assert_eq!(normalized, cwd.join("child"));
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_absolute_unchanged() {
        let normalized = normalize(Path::new("/etc/hosts")).unwrap();
        assert_eq!(normalized, Path::new("/etc/hosts"));
    }

    #[test]
    fn test_normalize_empty_rejected() {
        let result = normalize(Path::new(""));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::InvalidPath { .. }));
    }

    #[test]
    fn test_normalize_preserves_dot_components() {
        // `.` and `..` are left for canonicalization, which resolves them
        // against the real filesystem rather than lexically.
        let cwd = env::current_dir().unwrap();
        let normalized = normalize(Path::new("./a/../b")).unwrap();
        assert_eq!(normalized, cwd.join("./a/../b"));
    }
}
