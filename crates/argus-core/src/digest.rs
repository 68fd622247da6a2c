//! # Content Digests
//!
//! Defines the two digest representations used across the attestation stack:
//!
//! - [`ContentDigest`] — an algorithm-tagged 32-byte digest, produced only
//!   from [`CanonicalBytes`] via [`sha256_digest()`]. This is the internal
//!   form for content-addressed data.
//! - [`HexDigest`] — the validated wire form: exactly 64 lowercase
//!   hexadecimal characters. Chain hashes, leaf hashes, commitments, and
//!   every digest-valued certificate field use this type, so a malformed
//!   digest is unrepresentable once constructed.
//!
//! ## Security Invariant
//!
//! `sha256_digest()` accepts only `&CanonicalBytes`, never raw `&[u8]`.
//! Structured data cannot reach a digest without passing through the
//! canonicalization pipeline. (Digest-chaining preimages — chain links and
//! Merkle nodes, whose inputs are already validated digests — hash their
//! fixed-order byte strings directly in their own crates.)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;
use crate::error::CryptoError;

/// The hash algorithm that produced a content digest.
///
/// SHA-256 is the only algorithm in the current wire format. The tag exists
/// so that stored digests remain self-describing if a successor algorithm
/// is ever introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// SHA-256 — the attestation wire format's digest algorithm.
    Sha256,
}

impl DigestAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An algorithm-tagged content digest.
///
/// Produced from `CanonicalBytes` via [`sha256_digest()`]. Convert to the
/// wire form with [`ContentDigest::to_hex_digest()`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Create a content digest from raw bytes and algorithm.
    ///
    /// Prefer [`sha256_digest()`] for digests over structured data.
    pub fn new(algorithm: DigestAlgorithm, bytes: [u8; 32]) -> Self {
        Self { algorithm, bytes }
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Convert to the validated wire form.
    pub fn to_hex_digest(&self) -> HexDigest {
        HexDigest(self.to_hex())
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

/// A SHA-256 digest in wire form: exactly 64 lowercase hex characters.
///
/// The inner string is private; the constructors validate, so any
/// `HexDigest` in the system is well-formed. Serializes as a plain JSON
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexDigest(String);

impl HexDigest {
    /// Parse a digest from a string, validating length and character set.
    ///
    /// Uppercase hex input is accepted and lowercased; the stored form is
    /// always lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidDigest`] unless the trimmed input is
    /// exactly 64 hex characters.
    pub fn parse(s: &str) -> Result<Self, CryptoError> {
        let s = s.trim().to_lowercase();
        if s.len() != 64 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CryptoError::InvalidDigest(format!(
                "digest must be 64 hex chars, got {:?} ({} chars)",
                s,
                s.len()
            )));
        }
        Ok(Self(s))
    }

    /// Construct a digest from raw 32 bytes.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// The digest as a hex string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner hex string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for HexDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for HexDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute a SHA-256 content digest from canonical bytes.
///
/// # Security Invariant
///
/// Accepts only `&CanonicalBytes`, not raw `&[u8]`. This compile-time
/// constraint keeps every structured-data digest on the canonicalization
/// pipeline.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest::new(DigestAlgorithm::Sha256, bytes)
}

/// Compute a SHA-256 digest from canonical bytes, in wire form.
pub fn sha256_hex(data: &CanonicalBytes) -> HexDigest {
    sha256_digest(data).to_hex_digest()
}
