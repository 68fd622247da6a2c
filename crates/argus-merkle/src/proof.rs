//! # Inclusion Proofs
//!
//! Generates and verifies the minimal sibling path needed to recompute the
//! Merkle root from one leaf. Generation walks the same level structure as
//! root computation (both build levels through the tree module's
//! `next_level`), recording at each level the sibling of the node on the
//! path to the target — including the self-duplicate on odd levels, which
//! the verifier folds like any other sibling.

use serde::{Deserialize, Serialize};

use argus_core::HexDigest;

use crate::error::MerkleError;
use crate::tree::{compute_node_hash, next_level};

/// Which side a sibling occupies when recombining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The sibling is the left operand of the node hash.
    Left,
    /// The sibling is the right operand of the node hash.
    Right,
}

impl Side {
    /// The wire string for this side.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step in an inclusion proof: a sibling hash and its side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// The sibling's hash.
    pub hash: HexDigest,
    /// The side the sibling occupies when recombining.
    pub position: Side,
}

/// An inclusion proof for one leaf of a Merkle tree.
///
/// `siblings` walks bottom-up; fold each into the running hash on the side
/// its `position` records to arrive back at `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionProof {
    /// The hash of the proven leaf.
    pub leaf_hash: HexDigest,
    /// The leaf's 0-based index in the tree.
    pub leaf_index: usize,
    /// The bottom-up sibling path.
    pub siblings: Vec<ProofStep>,
    /// The root this proof commits to.
    pub root: HexDigest,
    /// The number of leaves in the tree the proof was generated from.
    pub tree_size: usize,
}

/// Generate an inclusion proof for the leaf at `index`.
///
/// A single-leaf tree yields zero siblings and `root == leaf_hash`.
///
/// # Errors
///
/// - [`MerkleError::EmptyTree`] if `leaf_hashes` is empty.
/// - [`MerkleError::IndexOutOfBounds`] if `index >= leaf_hashes.len()`.
pub fn generate_inclusion_proof(
    leaf_hashes: &[HexDigest],
    index: usize,
) -> Result<InclusionProof, MerkleError> {
    if leaf_hashes.is_empty() {
        return Err(MerkleError::EmptyTree);
    }
    if index >= leaf_hashes.len() {
        return Err(MerkleError::IndexOutOfBounds {
            index,
            tree_size: leaf_hashes.len(),
        });
    }

    let mut level = leaf_hashes.to_vec();
    let mut pos = index;
    let mut siblings = Vec::new();

    while level.len() > 1 {
        if level.len() % 2 == 1 {
            // The duplicate participates in hashing, so it is a real
            // sibling for the last node's path.
            level.push(level[level.len() - 1].clone());
        }
        let sibling_pos = pos ^ 1;
        let position = if sibling_pos < pos {
            Side::Left
        } else {
            Side::Right
        };
        siblings.push(ProofStep {
            hash: level[sibling_pos].clone(),
            position,
        });
        level = next_level(&level);
        pos /= 2;
    }

    Ok(InclusionProof {
        leaf_hash: leaf_hashes[index].clone(),
        leaf_index: index,
        siblings,
        root: level[0].clone(),
        tree_size: leaf_hashes.len(),
    })
}

/// Verify an inclusion proof against a claimed leaf and root.
///
/// Fail-closed boolean: the claimed leaf must match the proof's leaf, and
/// the folded sibling path must reproduce both the proof's root and the
/// claimed root. Any tampering — with a sibling hash, a side, the claimed
/// leaf, or the claimed root — flips the result to `false`.
pub fn verify_inclusion_proof(
    proof: &InclusionProof,
    claimed_leaf_hash: &HexDigest,
    claimed_root: &HexDigest,
) -> bool {
    if proof.leaf_hash != *claimed_leaf_hash {
        return false;
    }

    let mut running = proof.leaf_hash.clone();
    for step in &proof.siblings {
        running = match step.position {
            Side::Right => compute_node_hash(&running, &step.hash),
            Side::Left => compute_node_hash(&step.hash, &running),
        };
    }

    running == proof.root && running == *claimed_root
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::tree::compute_merkle_root;
    use proptest::prelude::*;

    fn arb_leaves() -> impl Strategy<Value = Vec<HexDigest>> {
        prop::collection::vec(any::<[u8; 32]>(), 1..40)
            .prop_map(|v| v.iter().map(HexDigest::from_bytes).collect::<Vec<_>>())
    }

    proptest! {
        /// Every generated proof verifies against its own tree's root.
        #[test]
        fn generated_proofs_always_verify((l, idx) in arb_leaves().prop_flat_map(|l| {
            let len = l.len();
            (Just(l), 0..len)
        })) {
            let root = HexDigest::parse(&compute_merkle_root(&l)).unwrap();
            let proof = generate_inclusion_proof(&l, idx).unwrap();
            prop_assert!(verify_inclusion_proof(&proof, &l[idx], &root));
        }
    }
}
