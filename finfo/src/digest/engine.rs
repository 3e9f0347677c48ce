//! Single-pass multi-digest computation.
//!
//! The engine streams a file's bytes once and feeds each chunk to every
//! requested accumulator, so digesting N algorithms costs one sequential
//! scan instead of N. The work is I/O-bound; the fan-out is a plain loop
//! inside the read loop, not a multi-writer abstraction and not threads.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::digest::Algorithm;
use crate::error::{Error, Result};

/// Size of each read. Internal tuning only; never observable in results.
const CHUNK_SIZE: usize = 64 * 1024;

/// A digest accumulator for one algorithm.
enum Hasher {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
}

impl Hasher {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => Self::Md5(Md5::new()),
            Algorithm::Sha1 => Self::Sha1(Sha1::new()),
            Algorithm::Sha256 => Self::Sha256(Sha256::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md5(h) => h.update(data),
            Self::Sha1(h) => h.update(data),
            Self::Sha256(h) => h.update(data),
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            Self::Md5(h) => hex::encode(h.finalize()),
            Self::Sha1(h) => hex::encode(h.finalize()),
            Self::Sha256(h) => hex::encode(h.finalize()),
        }
    }
}

/// Compute the requested digests of a file in a single pass.
///
/// Opens the file once, reads it in fixed-size chunks, and feeds every
/// chunk to every accumulator in file order. Memory use is bounded by the
/// chunk size regardless of file size. The result maps each requested
/// algorithm to its digest as lowercase hexadecimal; the result's key set
/// always equals the request set exactly.
///
/// Callers are responsible for excluding directories before calling this;
/// the path must refer to an existing regular file.
///
/// # Errors
///
/// Returns an error if:
/// - The algorithm set is empty (`NoAlgorithms`)
/// - The file cannot be opened (`Open`)
/// - Any read fails mid-scan (`Read`) — the whole operation fails and no
///   partial digests are returned
///
/// # Examples
///
/// ```no_run
/// use std::collections::BTreeSet;
/// use std::path::Path;
/// use finfo::digest::{digest_all, Algorithm};
///
/// let algorithms: BTreeSet<Algorithm> = Algorithm::ALL.into_iter().collect();
/// let digests = digest_all(Path::new("Cargo.toml"), &algorithms).unwrap();
/// assert_eq!(digests.len(), 3);
/// assert_eq!(digests[&Algorithm::Sha256].len(), 64);
/// ```
pub fn digest_all(
    path: &Path,
    algorithms: &BTreeSet<Algorithm>,
) -> Result<BTreeMap<Algorithm, String>> {
    if algorithms.is_empty() {
        return Err(Error::NoAlgorithms);
    }

    let mut hashers: BTreeMap<Algorithm, Hasher> = algorithms
        .iter()
        .map(|&algorithm| (algorithm, Hasher::new(algorithm)))
        .collect();

    let mut file = File::open(path).map_err(|e| Error::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        if n == 0 {
            break;
        }
        for hasher in hashers.values_mut() {
            hasher.update(&buf[..n]);
        }
    }

    Ok(hashers
        .into_iter()
        .map(|(algorithm, hasher)| (algorithm, hasher.finalize_hex()))
        .collect())
}
