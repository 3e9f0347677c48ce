//! Multi-digest computation over a single file scan.
//!
//! Given a regular file and a set of algorithm names, the engine streams
//! the file's bytes exactly once and produces one digest per algorithm.
//! Each chunk read is fed to every accumulator before the next chunk is
//! read (fan-out within one sequential loop), so the I/O cost is constant
//! in the number of algorithms.
//!
//! # Examples
//!
//! ```no_run
//! use std::collections::BTreeSet;
//! use std::path::Path;
//! use finfo::digest::{digest_all, Algorithm};
//!
//! let algorithms: BTreeSet<Algorithm> = Algorithm::ALL.into_iter().collect();
//! let digests = digest_all(Path::new("data.bin"), &algorithms).unwrap();
//! for (algorithm, hex) in &digests {
//!     println!("{algorithm}: {hex}");
//! }
//! ```

mod algorithm;
mod engine;

pub use algorithm::Algorithm;
pub use engine::digest_all;
