//! # Certificate Error Types
//!
//! Structural errors from certificate issuance. Verification mismatches are
//! not errors — they come back as booleans or a
//! [`CertificateVerification`](crate::verify::CertificateVerification).

use thiserror::Error;

use argus_core::error::CanonicalizationError;
use argus_core::CheckpointId;
use argus_merkle::MerkleError;

/// Errors from certificate issuance.
#[derive(Error, Debug)]
pub enum CertificateError {
    /// The signed payload failed canonicalization.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Inclusion proof generation failed (empty tree, bad index).
    #[error("merkle proof generation failed: {0}")]
    Merkle(#[from] MerkleError),

    /// The leaf at the supplied index is not the checkpoint's leaf — the
    /// caller handed an index into the wrong tree, or the wrong index.
    #[error("leaf at index {index} does not correspond to checkpoint {checkpoint_id}")]
    LeafMismatch {
        /// The supplied leaf index.
        index: usize,
        /// The checkpoint the certificate was requested for.
        checkpoint_id: CheckpointId,
    },
}
