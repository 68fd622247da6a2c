//! # Leaf Hashing
//!
//! Hashes one checkpoint's fields into its Merkle leaf. The preimage is the
//! five fields joined in fixed order with `|`:
//!
//! ```text
//! checkpoint_id | verdict | thinking_block_hash | chain_hash | timestamp
//! ```
//!
//! The chain hash is deliberately included, binding the accumulator to the
//! hash chain: a leaf cannot be recomputed for a checkpoint whose chain
//! position was forged without the inclusion proof breaking too.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use argus_core::{CheckpointId, HexDigest, Timestamp, Verdict};

/// The checkpoint fields hashed into one Merkle leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafData {
    /// Identifier of the checkpoint.
    pub checkpoint_id: CheckpointId,
    /// The verdict recorded at the checkpoint.
    pub verdict: Verdict,
    /// Digest of the evaluator's reasoning block.
    pub thinking_block_hash: HexDigest,
    /// The checkpoint's chain hash — the chain/tree binding.
    pub chain_hash: HexDigest,
    /// When the checkpoint was recorded.
    pub timestamp: Timestamp,
}

/// Compute the Merkle leaf hash for one checkpoint.
///
/// Pure and synchronous; every field independently affects the output.
pub fn compute_leaf_hash(data: &LeafData) -> HexDigest {
    let preimage = format!(
        "{id}|{verdict}|{thinking}|{chain}|{timestamp}",
        id = data.checkpoint_id.as_str(),
        verdict = data.verdict.as_str(),
        thinking = data.thinking_block_hash.as_str(),
        chain = data.chain_hash.as_str(),
        timestamp = data.timestamp.to_iso8601(),
    );
    let hash = Sha256::digest(preimage.as_bytes());
    HexDigest::from_bytes(&hash.into())
}
