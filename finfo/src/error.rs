//! Error types for the finfo library.
//!
//! This module provides the error hierarchy for path resolution and digest
//! computation, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a finfo error.
///
/// # Examples
///
/// ```
/// use finfo::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the finfo library.
///
/// Every variant is terminal for the current invocation: nothing is retried
/// and there is no partial-success state. In particular, a digest run that
/// fails mid-scan produces no digests at all.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    ///
    /// A symlink chain whose final target is missing (a broken symlink)
    /// also reports this variant.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied while resolving a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// Metadata retrieval failed for a reason other than nonexistence.
    #[error("cannot stat {}: {source}", path.display())]
    Metadata {
        /// The path whose metadata could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A file could not be opened for reading.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// The file that could not be opened.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An I/O failure occurred while scanning a file's contents.
    #[error("read failed for {}: {source}", path.display())]
    Read {
        /// The file being scanned when the failure occurred.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An unknown digest algorithm name was requested.
    #[error("unsupported digest algorithm: {name}")]
    UnsupportedAlgorithm {
        /// The unrecognized algorithm name.
        name: String,
    },

    /// A digest run was requested with an empty algorithm set.
    #[error("no digest algorithms requested")]
    NoAlgorithms,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use finfo::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use finfo::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
