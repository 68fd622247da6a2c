//! # Chain Linking and Verification
//!
//! Computes chain hashes and verifies links. The preimage is the six
//! checkpoint fields joined in fixed order with `|`, with
//! [`GENESIS_SENTINEL`] substituted for a null previous hash:
//!
//! ```text
//! prev | checkpoint_id | verdict | thinking_block_hash | input_commitment | timestamp
//! ```
//!
//! The preimage encoding is a versioned wire format — previously issued
//! certificates pin it. Inputs other than `checkpoint_id` are validated
//! digests, a closed verdict vocabulary, and a canonical timestamp
//! rendering, none of which can contain the separator.
//!
//! ## Verification Design
//!
//! Linkage (`prev_chain_hash` equals the predecessor's stored hash) and
//! content (the stored hash recomputes from the checkpoint's own fields)
//! are two independent predicates. A chain whose individual hashes all
//! recompute correctly but whose links point at the wrong predecessors is
//! still a forged or reordered chain; checking the predicates separately
//! makes deletion, reordering, and field tampering distinguishable in the
//! reported break, which is what incident diagnosis needs.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use argus_core::HexDigest;

use crate::checkpoint::{ChainCheckpoint, ChainInput, GENESIS_SENTINEL};

/// Why a chain failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainBreakKind {
    /// The first checkpoint carries a previous chain hash. Structural —
    /// the chain shape is wrong before any hash is compared.
    GenesisPrevHashNotNull,
    /// A checkpoint's `prev_chain_hash` does not equal its predecessor's
    /// stored chain hash: deletion, reordering, or splice.
    LinkageMismatch,
    /// A checkpoint's stored chain hash does not recompute from its own
    /// fields: in-place tampering.
    ContentHashMismatch,
}

/// The result of verifying an ordered checkpoint sequence.
///
/// `links_verified` counts the checkpoints that passed every check strictly
/// before the first failure, so a break at index `k` reports `k` clean
/// links — the forensic "where did tampering begin" answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainVerification {
    /// Whether the whole sequence verified.
    pub valid: bool,
    /// Checkpoints that passed all checks before the first failure.
    pub links_verified: usize,
    /// Index of the earliest failing checkpoint, if any.
    pub broken_at: Option<usize>,
    /// The kind of the first break, if any.
    pub break_kind: Option<ChainBreakKind>,
    /// Human-readable summary of the outcome.
    pub details: String,
}

impl ChainVerification {
    fn valid(links_verified: usize, details: impl Into<String>) -> Self {
        Self {
            valid: true,
            links_verified,
            broken_at: None,
            break_kind: None,
            details: details.into(),
        }
    }

    fn broken(at: usize, kind: ChainBreakKind, details: impl Into<String>) -> Self {
        Self {
            valid: false,
            links_verified: at,
            broken_at: Some(at),
            break_kind: Some(kind),
            details: details.into(),
        }
    }
}

/// Serialize the chain preimage in fixed field order.
fn chain_preimage(input: &ChainInput) -> String {
    let prev = match &input.prev_chain_hash {
        Some(digest) => digest.as_str(),
        None => GENESIS_SENTINEL,
    };
    format!(
        "{prev}|{id}|{verdict}|{thinking}|{commitment}|{timestamp}",
        id = input.checkpoint_id.as_str(),
        verdict = input.verdict.as_str(),
        thinking = input.thinking_block_hash.as_str(),
        commitment = input.input_commitment.as_str(),
        timestamp = input.timestamp.to_iso8601(),
    )
}

/// Compute the chain hash for one checkpoint input.
///
/// Pure: the output depends only on the six declared fields. Every field
/// independently affects the result.
pub fn compute_chain_hash(input: &ChainInput) -> HexDigest {
    let hash = Sha256::digest(chain_preimage(input).as_bytes());
    HexDigest::from_bytes(&hash.into())
}

/// Verify a single chain link by recomputation.
///
/// A boolean predicate, not a validation error: any mismatch — including a
/// single tampered field — returns `false`.
pub fn verify_chain_link(input: &ChainInput, claimed_hash: &HexDigest) -> bool {
    compute_chain_hash(input) == *claimed_hash
}

/// Verify an ordered checkpoint sequence, localizing the first break.
///
/// Walks the checkpoints in array order and short-circuits at the first
/// failure — once the chain forks, trust in everything downstream is void.
/// At index 0 the previous hash must be null; at every later index the
/// linkage to the predecessor is checked before, and independently of, the
/// recomputation of the checkpoint's own hash.
pub fn verify_chain_sequence(chain: &[ChainCheckpoint]) -> ChainVerification {
    if chain.is_empty() {
        return ChainVerification::valid(0, "Empty chain");
    }

    for (i, checkpoint) in chain.iter().enumerate() {
        if i == 0 {
            if checkpoint.input.prev_chain_hash.is_some() {
                return ChainVerification::broken(
                    0,
                    ChainBreakKind::GenesisPrevHashNotNull,
                    "genesis checkpoint must have a null previous chain hash, but one is present",
                );
            }
        } else {
            let prev_hash = &chain[i - 1].chain_hash;
            if checkpoint.input.prev_chain_hash.as_ref() != Some(prev_hash) {
                return ChainVerification::broken(
                    i,
                    ChainBreakKind::LinkageMismatch,
                    format!(
                        "previous-hash link at checkpoint {i} does not match the chain hash of checkpoint {}",
                        i - 1
                    ),
                );
            }
        }

        if !verify_chain_link(&checkpoint.input, &checkpoint.chain_hash) {
            return ChainVerification::broken(
                i,
                ChainBreakKind::ContentHashMismatch,
                format!("chain hash recomputation at checkpoint {i} does not match the stored hash"),
            );
        }
    }

    ChainVerification::valid(chain.len(), format!("{} links verified", chain.len()))
}
