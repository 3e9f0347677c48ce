//! Path resolution.
//!
//! This module provides [`resolve`], the main entry point that turns a
//! user-supplied path into a [`ResolvedPath`]: canonical absolute form with
//! symlinks fully dereferenced, plus the target's metadata.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::types::ResolvedPath;
use crate::path::{canonicalize, normalize};

/// Resolve a path to its canonical form and metadata.
///
/// Resolution proceeds in three steps:
/// 1. Normalize: expand a leading tilde and make the path absolute
///    against the current working directory.
/// 2. Canonicalize: follow the symlink chain to the final real target.
/// 3. Stat: read the target's metadata for type and size.
///
/// The function performs read-only filesystem queries and nothing else.
///
/// # Errors
///
/// Returns an error if:
/// - The input is malformed (`InvalidPath`)
/// - The target or any symlink in the chain does not exist
///   (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Metadata retrieval fails for any other reason (`Metadata`)
///
/// # Examples
///
/// ```no_run
/// use finfo::path::resolve;
/// use std::path::Path;
///
/// let resolved = resolve(Path::new("Cargo.toml")).unwrap();
/// assert!(resolved.path().is_absolute());
/// assert!(!resolved.is_dir());
/// ```
pub fn resolve(path: &Path) -> Result<ResolvedPath> {
    let normalized = normalize::normalize(path)?;
    let canonical = canonicalize::canonicalize(&normalized)?;

    let metadata = fs::metadata(&canonical).map_err(|e| match e.kind() {
        // The target can disappear between canonicalization and stat.
        ErrorKind::NotFound => Error::PathNotFound {
            path: canonical.clone(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: canonical.clone(),
        },
        _ => Error::Metadata {
            path: canonical.clone(),
            source: e,
        },
    })?;

    Ok(ResolvedPath::new(
        canonical,
        metadata.is_dir(),
        metadata.len(),
    ))
}
