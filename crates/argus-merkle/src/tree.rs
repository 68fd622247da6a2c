//! # Tree Construction
//!
//! Bottom-up Merkle root computation over an ordered leaf-hash list.
//!
//! Node hashing concatenates the two child digests' hex strings and hashes
//! the result, so `hash(a, b) != hash(b, a)` — concatenation order is what
//! gives sibling sides their meaning in inclusion proofs.

use sha2::{Digest, Sha256};

use argus_core::HexDigest;

/// Combine two child digests into their parent node hash.
///
/// SHA-256 over `left ++ right` (hex-string concatenation). Order matters.
pub fn compute_node_hash(left: &HexDigest, right: &HexDigest) -> HexDigest {
    let mut hasher = Sha256::new();
    hasher.update(left.as_str().as_bytes());
    hasher.update(right.as_str().as_bytes());
    HexDigest::from_bytes(&hasher.finalize().into())
}

/// Build the next level up from `level`, duplicating the last node first
/// when the count is odd.
///
/// Shared by root computation and proof generation so the two can never
/// disagree about tree shape.
pub(crate) fn next_level(level: &[HexDigest]) -> Vec<HexDigest> {
    let mut padded: Vec<&HexDigest> = level.iter().collect();
    if padded.len() % 2 == 1 {
        if let Some(last) = padded.last().copied() {
            padded.push(last);
        }
    }
    padded
        .chunks(2)
        .map(|pair| compute_node_hash(pair[0], pair[1]))
        .collect()
}

/// Compute the Merkle root of an ordered leaf-hash list.
///
/// - Empty list → `""` (the empty-tree sentinel, not an error).
/// - One leaf → that leaf's hex (no combination).
/// - Otherwise, pair bottom-up with last-node duplication at every odd
///   level until one node remains.
///
/// Returns `String` rather than [`HexDigest`] because the empty-tree
/// sentinel is part of the wire format and a `HexDigest` cannot hold it.
pub fn compute_merkle_root(leaf_hashes: &[HexDigest]) -> String {
    match leaf_hashes {
        [] => String::new(),
        [single] => single.as_str().to_string(),
        _ => {
            let mut level = leaf_hashes.to_vec();
            while level.len() > 1 {
                level = next_level(&level);
            }
            level[0].as_str().to_string()
        }
    }
}
