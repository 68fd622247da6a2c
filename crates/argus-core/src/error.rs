//! # Error Types — Structured Error Hierarchy
//!
//! The error types shared across the attestation stack, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! ## Design
//!
//! Two failure styles are kept strictly apart:
//!
//! - **Structural/contract violations** (malformed digests, invalid
//!   identifiers, canonicalization of float-bearing input, empty-tree or
//!   out-of-bounds accumulator calls) are `Err` values from these enums or
//!   the per-crate enums built on them. They indicate caller misuse.
//! - **Cryptographic/content mismatches** (wrong hash, broken linkage,
//!   bad signature) are *never* errors — the verify functions return
//!   booleans or structured verdict values, because tampering is an
//!   expected, first-class outcome to detect.

use thiserror::Error;

/// Top-level error type for the attestation stack.
#[derive(Error, Debug)]
pub enum ArgusError {
    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Cryptographic operation failed (key parsing, digest validation).
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// An identifier failed format validation.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A timestamp failed format validation.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Quantities must be strings or integers.
    #[error("float values are not permitted in canonical representations; use string or integer: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error in cryptographic material handling.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Signature verification machinery failed (malformed key or signature
    /// bytes — distinct from an honest verification mismatch, which is a
    /// boolean `false`).
    #[error("signature verification failed: {0}")]
    VerificationFailed(String),

    /// Key generation or parsing failed.
    #[error("key error: {0}")]
    KeyError(String),

    /// A digest string failed the 64-lowercase-hex wire format.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalization_error_display() {
        let err = ArgusError::Canonicalization(CanonicalizationError::FloatRejected(2.5));
        let msg = format!("{err}");
        assert!(msg.contains("canonicalization error"));
        assert!(msg.contains("2.5"));
    }

    #[test]
    fn crypto_error_display() {
        let err = CryptoError::InvalidDigest("bad".to_string());
        assert!(format!("{err}").contains("bad"));
    }

    #[test]
    fn key_error_display() {
        let err = ArgusError::Crypto(CryptoError::KeyError("short seed".to_string()));
        assert!(format!("{err}").contains("short seed"));
    }

    #[test]
    fn identifier_error_display() {
        let err = ArgusError::InvalidIdentifier("empty checkpoint id".to_string());
        assert!(format!("{err}").contains("empty checkpoint id"));
    }

    #[test]
    fn all_errors_are_debug() {
        let e1 = ArgusError::InvalidTimestamp("x".to_string());
        let e2 = CanonicalizationError::FloatRejected(0.0);
        let e3 = CryptoError::VerificationFailed("y".to_string());
        assert!(!format!("{e1:?}").is_empty());
        assert!(!format!("{e2:?}").is_empty());
        assert!(!format!("{e3:?}").is_empty());
    }
}
