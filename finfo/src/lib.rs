#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # finfo
//!
//! A library for inspecting a single filesystem path: canonical absolute
//! form with symlinks dereferenced, file-vs-directory classification,
//! human-readable SI size, and MD5/SHA-1/SHA-256 digests computed in one
//! streaming pass over the file.
//!
//! ## Core pieces
//!
//! - [`path::resolve`] and [`ResolvedPath`]: path resolution and metadata
//! - [`digest::digest_all`] and [`Algorithm`]: single-pass multi-digest
//!   computation
//! - [`size::format_size`]: SI byte formatting
//! - [`RowSet`]: deterministic `LABEL: value` rendering
//! - [`report::build_report`]: composition of the above
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```no_run
//! use finfo::report::{build_report, ReportOptions};
//! use std::path::Path;
//!
//! let options = ReportOptions { detail: true };
//! let report = build_report(Path::new("Cargo.toml"), &options).unwrap();
//! print!("{report}");
//! ```

pub mod digest;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod report;
pub mod size;

// Re-export key types at crate root for convenience
pub use digest::Algorithm;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::RowSet;
pub use path::ResolvedPath;
pub use report::ReportOptions;
