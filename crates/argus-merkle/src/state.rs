//! # Tree State Reporting
//!
//! Point-in-time accumulator summaries for publication and audit. A
//! [`TreeState`] owns a copy of the leaf list it was built from, so later
//! mutation of the caller's list cannot retroactively alter a previously
//! reported state — a named, tested invariant.

use serde::{Deserialize, Serialize};

use argus_core::HexDigest;

use crate::tree::compute_merkle_root;

/// A point-in-time summary of the accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeState {
    /// The Merkle root; `""` when the tree is empty.
    pub root: String,
    /// Tree depth: 0 for 0 or 1 leaves, else `ceil(log2(leaf_count))`.
    pub depth: u32,
    /// The number of leaves.
    pub leaf_count: usize,
    /// The ordered leaf list, copied at construction.
    pub leaf_hashes: Vec<HexDigest>,
}

/// Build a tree state from the current leaf list.
pub fn build_tree_state(leaf_hashes: &[HexDigest]) -> TreeState {
    let leaf_count = leaf_hashes.len();
    let depth = if leaf_count <= 1 {
        0
    } else {
        ceil_log2(leaf_count)
    };
    TreeState {
        root: compute_merkle_root(leaf_hashes),
        depth,
        leaf_count,
        leaf_hashes: leaf_hashes.to_vec(),
    }
}

/// `ceil(log2(n))` for `n >= 2`.
fn ceil_log2(n: usize) -> u32 {
    let floor = usize::BITS - 1 - n.leading_zeros();
    if n.is_power_of_two() {
        floor
    } else {
        floor + 1
    }
}
