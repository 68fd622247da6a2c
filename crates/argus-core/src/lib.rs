//! # argus-core — Foundational Types for the Argus Attestation Stack
//!
//! This crate is the bedrock of the Argus Attestation Stack. It defines the
//! type-system primitives that every other crate in the workspace builds on.
//! Every other crate depends on `argus-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AgentId`, `CheckpointId`,
//!    `CertificateId`, `HexDigest` — all newtypes with validated constructors.
//!    No bare strings for identifiers or digests.
//!
//! 2. **`CanonicalBytes` is the sole path from structured data to digests.**
//!    Commitment and signing inputs flow through `CanonicalBytes::new()`,
//!    which applies JCS canonicalization (RFC 8785) with float rejection.
//!    No raw `serde_json::to_vec()` for digest computation. Ever.
//!
//! 3. **Single `Verdict` enum.** One definition, exhaustive `match`
//!    everywhere. Adding a verdict forces every consumer to handle it.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so timestamps in hash preimages are
//!    deterministic.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `argus-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public wire types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;
pub mod verdict;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, ContentDigest, DigestAlgorithm, HexDigest};
pub use error::{ArgusError, CanonicalizationError, CryptoError};
pub use identity::{AgentId, CertificateId, CheckpointId};
pub use temporal::Timestamp;
pub use verdict::Verdict;
