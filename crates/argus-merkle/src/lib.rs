//! # argus-merkle — Merkle Accumulator over Checkpoint Leaves
//!
//! Builds a binary Merkle tree over an ordered list of checkpoint leaf
//! hashes, so that one published root commits to the entire checkpoint set
//! and any single leaf can be proven included with a logarithmic sibling
//! path.
//!
//! ## Tree Convention
//!
//! At every level with an odd node count the last node is duplicated before
//! pairing — at every level independently, since odd counts recur as the
//! tree shrinks. The empty tree's root is the empty string. Both rules are
//! versioned wire-format constants: previously generated proofs pin them.
//!
//! ## No Accumulator Object
//!
//! Every operation takes the full ordered leaf-hash list and returns a
//! fresh result. There is no internal tree state to corrupt, and the
//! accumulator is rebuildable from a flat list reloaded from storage —
//! correctness never depends on cached intermediate nodes. O(n) rebuild
//! per append is the accepted cost at per-agent checkpoint volumes.
//!
//! Leaf data deliberately includes the checkpoint's chain hash, binding
//! this structure to the hash chain: tampering with either is
//! independently detectable.

pub mod error;
pub mod leaf;
pub mod proof;
pub mod state;
pub mod tree;

// Re-export primary types.
pub use error::MerkleError;
pub use leaf::{compute_leaf_hash, LeafData};
pub use proof::{generate_inclusion_proof, verify_inclusion_proof, InclusionProof, ProofStep, Side};
pub use state::{build_tree_state, TreeState};
pub use tree::{compute_merkle_root, compute_node_hash};
