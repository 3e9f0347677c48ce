//! Digest algorithm identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A supported digest algorithm.
///
/// The supported set is fixed to MD5, SHA-1, and SHA-256. Extending it
/// means adding a variant here and a matching accumulator arm in the
/// engine; nothing else in the pipeline changes.
///
/// The derived ordering sorts by display name (`MD5` < `SHA1` < `SHA256`),
/// which is what keyed collections rely on for deterministic output.
///
/// # Examples
///
/// ```
/// use finfo::digest::Algorithm;
///
/// let alg: Algorithm = "sha256".parse().unwrap();
/// assert_eq!(alg, Algorithm::Sha256);
/// assert_eq!(alg.name(), "SHA256");
/// assert_eq!(alg.hex_len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    /// MD5 (128-bit digest).
    Md5,
    /// SHA-1 (160-bit digest).
    Sha1,
    /// SHA-256 (256-bit digest).
    Sha256,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Self; 3] = [Self::Md5, Self::Sha1, Self::Sha256];

    /// The display name used as the output label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
        }
    }

    /// Length of the digest rendered as lowercase hexadecimal.
    #[must_use]
    pub const fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha256 => 64,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(Error::UnsupportedAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}
