//! # Merkle Error Types
//!
//! Structural errors only: these variants report caller contract
//! violations. A proof that fails to verify is a boolean `false` from
//! [`verify_inclusion_proof`](crate::proof::verify_inclusion_proof), never
//! an error — tampering is an expected outcome to detect.

use thiserror::Error;

/// Errors from Merkle accumulator operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MerkleError {
    /// An inclusion proof was requested for an empty tree.
    #[error("empty tree: cannot generate an inclusion proof with no leaves")]
    EmptyTree,

    /// The requested leaf index does not exist in the tree.
    #[error("out of bounds: leaf index {index} is outside a tree of {tree_size} leaves")]
    IndexOutOfBounds {
        /// The requested leaf index.
        index: usize,
        /// The number of leaves in the tree.
        tree_size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_message() {
        assert!(format!("{}", MerkleError::EmptyTree).contains("empty tree"));
    }

    #[test]
    fn out_of_bounds_message_carries_context() {
        let err = MerkleError::IndexOutOfBounds {
            index: 9,
            tree_size: 4,
        };
        let msg = format!("{err}");
        assert!(msg.contains("out of bounds"));
        assert!(msg.contains('9'));
        assert!(msg.contains('4'));
    }
}
