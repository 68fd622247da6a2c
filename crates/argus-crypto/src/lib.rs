//! # argus-crypto — Cryptographic Primitives for the Attestation Stack
//!
//! Cryptographic building blocks for checkpoint attestation:
//!
//! - **Ed25519** key pairs, signing, and verification for integrity
//!   certificates. Signing input is `&CanonicalBytes` only — you cannot
//!   sign raw bytes.
//! - **SHA-256 digest computation** from
//!   [`CanonicalBytes`](argus_core::CanonicalBytes), producing
//!   [`ContentDigest`](argus_core::ContentDigest) values.
//!
//! Digest-chaining preimages (chain links, Merkle nodes) are hashed in
//! `argus-chain` and `argus-merkle` respectively; this crate covers signing
//! identities and the structured-data digest path.

pub mod ed25519;
pub mod sha256;

// Re-export primary types.
pub use ed25519::{verify, verify_with_public_key, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
pub use sha256::sha256_digest;
