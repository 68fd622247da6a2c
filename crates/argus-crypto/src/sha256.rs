//! # SHA-256 Digest Computation
//!
//! The structured-data digest path: [`CanonicalBytes`] in,
//! [`ContentDigest`] out.
//!
//! ## Security Invariant
//!
//! The function signature requires `CanonicalBytes` — not raw `&[u8]` — so
//! every digest produced here was computed from properly canonicalized data.
//! Delegates to [`argus_core::sha256_digest()`], the single implementation
//! in the workspace.

use argus_core::{sha256_digest as core_sha256_digest, CanonicalBytes, ContentDigest};

/// Compute a SHA-256 content digest from canonical bytes.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    core_sha256_digest(data)
}
