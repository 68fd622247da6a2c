//! # Signed Payloads
//!
//! The canonical payload a certificate signature covers. The payload
//! carries every field needed to recompute the checkpoint's chain hash and
//! Merkle leaf hash, so a verifier holding only the certificate can rebuild
//! both without access to the issuing server's storage.
//!
//! ## Security Invariant
//!
//! Signing input is produced by [`SignedPayload::canonical_bytes()`], which
//! goes through [`CanonicalBytes`] — the signature covers the JCS rendering,
//! so an independently canonicalizing verifier reconstructs the exact
//! signed message regardless of field order in transit.

use serde::{Deserialize, Serialize};

use argus_chain::{ChainCheckpoint, ChainInput};
use argus_core::error::CanonicalizationError;
use argus_core::{CanonicalBytes, CheckpointId, HexDigest, Timestamp, Verdict};
use argus_merkle::LeafData;

/// The canonical payload covered by a certificate's signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedPayload {
    /// Identifier of the attested checkpoint.
    pub checkpoint_id: CheckpointId,
    /// The attested verdict.
    pub verdict: Verdict,
    /// Digest of the evaluator's reasoning block.
    pub thinking_block_hash: HexDigest,
    /// The checkpoint's input commitment.
    pub input_commitment: HexDigest,
    /// When the checkpoint was recorded.
    pub timestamp: Timestamp,
    /// The checkpoint's chain hash.
    pub chain_hash: HexDigest,
}

impl SignedPayload {
    /// Derive the payload from a sealed checkpoint.
    pub fn from_checkpoint(checkpoint: &ChainCheckpoint) -> Self {
        Self {
            checkpoint_id: checkpoint.input.checkpoint_id.clone(),
            verdict: checkpoint.input.verdict,
            thinking_block_hash: checkpoint.input.thinking_block_hash.clone(),
            input_commitment: checkpoint.input.input_commitment.clone(),
            timestamp: checkpoint.input.timestamp,
            chain_hash: checkpoint.chain_hash.clone(),
        }
    }

    /// The canonical bytes the signature covers.
    pub fn canonical_bytes(&self) -> Result<CanonicalBytes, CanonicalizationError> {
        CanonicalBytes::new(self)
    }

    /// Rebuild the chain input for hash recomputation, supplying the
    /// previous hash from the certificate's chain proof.
    pub fn chain_input(&self, prev_chain_hash: Option<HexDigest>) -> ChainInput {
        ChainInput {
            prev_chain_hash,
            checkpoint_id: self.checkpoint_id.clone(),
            verdict: self.verdict,
            thinking_block_hash: self.thinking_block_hash.clone(),
            input_commitment: self.input_commitment.clone(),
            timestamp: self.timestamp,
        }
    }

    /// Rebuild the Merkle leaf data for leaf-hash recomputation.
    pub fn leaf_data(&self) -> LeafData {
        LeafData {
            checkpoint_id: self.checkpoint_id.clone(),
            verdict: self.verdict,
            thinking_block_hash: self.thinking_block_hash.clone(),
            chain_hash: self.chain_hash.clone(),
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_chain::compute_chain_hash;
    use argus_merkle::compute_leaf_hash;

    fn digest(n: u8) -> HexDigest {
        HexDigest::from_bytes(&[n; 32])
    }

    fn sealed_checkpoint() -> ChainCheckpoint {
        ChainCheckpoint::seal(ChainInput {
            prev_chain_hash: Some(digest(5)),
            checkpoint_id: CheckpointId::new("cp-3").unwrap(),
            verdict: Verdict::Compliant,
            thinking_block_hash: digest(1),
            input_commitment: digest(2),
            timestamp: Timestamp::parse("2026-08-01T12:00:03Z").unwrap(),
        })
    }

    #[test]
    fn payload_mirrors_checkpoint_fields() {
        let cp = sealed_checkpoint();
        let payload = SignedPayload::from_checkpoint(&cp);
        assert_eq!(payload.checkpoint_id, cp.input.checkpoint_id);
        assert_eq!(payload.verdict, cp.input.verdict);
        assert_eq!(payload.chain_hash, cp.chain_hash);
    }

    #[test]
    fn chain_input_roundtrip_recomputes_same_hash() {
        let cp = sealed_checkpoint();
        let payload = SignedPayload::from_checkpoint(&cp);
        let rebuilt = payload.chain_input(cp.input.prev_chain_hash.clone());
        assert_eq!(compute_chain_hash(&rebuilt), cp.chain_hash);
    }

    #[test]
    fn leaf_data_matches_checkpoint_leaf() {
        let cp = sealed_checkpoint();
        let payload = SignedPayload::from_checkpoint(&cp);
        let expected = compute_leaf_hash(&LeafData {
            checkpoint_id: cp.input.checkpoint_id.clone(),
            verdict: cp.input.verdict,
            thinking_block_hash: cp.input.thinking_block_hash.clone(),
            chain_hash: cp.chain_hash.clone(),
            timestamp: cp.input.timestamp,
        });
        assert_eq!(compute_leaf_hash(&payload.leaf_data()), expected);
    }

    #[test]
    fn canonical_bytes_are_field_order_independent() {
        let cp = sealed_checkpoint();
        let payload = SignedPayload::from_checkpoint(&cp);
        let direct = payload.canonical_bytes().unwrap();

        // Re-parse from JSON with whatever key order serde_json produces;
        // canonicalization must converge on the same bytes.
        let json = serde_json::to_string(&payload).unwrap();
        let reparsed: SignedPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed.canonical_bytes().unwrap(), direct);
    }
}
