//! # argus-cert — Integrity Certificates
//!
//! Bundles the three proofs produced by the rest of the stack — an Ed25519
//! signature over a canonical payload, the chain-linkage proof, and the
//! Merkle inclusion proof — into one externally publishable
//! [`IntegrityCertificate`] document.
//!
//! The design goal is third-party verifiability: a consumer holding only a
//! certificate and the issuer's public key re-runs
//! [`verify_checkpoint_signature`], recomputes the chain hash from the
//! signed payload, and re-folds the inclusion proof — no trust in the
//! issuing server required. [`verify_certificate`] packages that whole
//! re-verification.

pub mod certificate;
pub mod error;
pub mod issuer;
pub mod payload;
pub mod verify;

// Re-export primary types.
pub use certificate::{
    CertificateProofs, ChainProof, InputCommitments, IntegrityCertificate, MerkleProof,
    SignatureProof, SIGNATURE_ALGORITHM,
};
pub use error::CertificateError;
pub use issuer::{CertificateIssuer, MerkleContext};
pub use payload::SignedPayload;
pub use verify::{verify_certificate, verify_checkpoint_signature, CertificateVerification};
