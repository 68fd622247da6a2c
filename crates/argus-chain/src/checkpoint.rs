//! # Checkpoint Types
//!
//! [`ChainInput`] holds the six fields that determine one chain hash;
//! [`ChainCheckpoint`] is the persisted unit — an input plus its computed
//! hash. The sanctioned way to produce a checkpoint is
//! [`ChainCheckpoint::seal()`], which computes the hash exactly once; a
//! stored hash is never recomputed in place, because a checkpoint whose
//! fields no longer match its hash is precisely what verification exists
//! to catch.

use serde::{Deserialize, Serialize};

use argus_core::{CheckpointId, HexDigest, Timestamp, Verdict};

use crate::linker::compute_chain_hash;

/// The fixed string substituted for a null previous chain hash inside the
/// hash preimage.
///
/// A genesis link hashes this sentinel — never the literal absence of a
/// field — so a genesis checkpoint is distinguishable by hash from any
/// non-genesis checkpoint. This is a versioned wire-format constant:
/// changing it makes every previously issued certificate unverifiable.
pub const GENESIS_SENTINEL: &str = "GENESIS";

/// The fields that determine one chain hash.
///
/// Immutable by convention: an input is constructed fresh per checkpoint
/// event and consumed by [`ChainCheckpoint::seal()`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInput {
    /// The predecessor checkpoint's chain hash; `None` for genesis.
    pub prev_chain_hash: Option<HexDigest>,
    /// Identifier of this checkpoint.
    pub checkpoint_id: CheckpointId,
    /// The verdict recorded at this checkpoint.
    pub verdict: Verdict,
    /// Digest of the evaluator's reasoning block.
    pub thinking_block_hash: HexDigest,
    /// The input commitment covering the record the evaluator saw.
    pub input_commitment: HexDigest,
    /// When the checkpoint was recorded (UTC).
    pub timestamp: Timestamp,
}

/// One persisted checkpoint: a [`ChainInput`] plus its computed chain hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainCheckpoint {
    /// The fields the chain hash was computed from.
    #[serde(flatten)]
    pub input: ChainInput,
    /// The chain hash linking this checkpoint to its predecessor.
    pub chain_hash: HexDigest,
}

impl ChainCheckpoint {
    /// Seal an input into a checkpoint by computing its chain hash.
    ///
    /// This is the only sanctioned construction path for new checkpoints;
    /// deserialization of stored data is the other way a checkpoint comes
    /// to exist, and stored data is what the verify functions audit.
    pub fn seal(input: ChainInput) -> Self {
        let chain_hash = compute_chain_hash(&input);
        Self { input, chain_hash }
    }

    /// Whether this checkpoint claims to be the genesis of its chain.
    pub fn is_genesis(&self) -> bool {
        self.input.prev_chain_hash.is_none()
    }
}
