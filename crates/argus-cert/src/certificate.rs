//! # The Integrity Certificate Document
//!
//! The externally published attestation for one checkpoint: the subject
//! fields, three proof blocks (signature, chain, Merkle), and the input
//! commitment metadata. The JSON rendering is the wire format consumed by
//! dashboards and external auditors; it round-trips losslessly.

use serde::{Deserialize, Serialize};

use argus_core::{CertificateId, CheckpointId, HexDigest, Timestamp, Verdict};
use argus_crypto::Ed25519Signature;
use argus_merkle::{InclusionProof, ProofStep};

use crate::payload::SignedPayload;

/// The signature algorithm string published in every certificate.
pub const SIGNATURE_ALGORITHM: &str = "Ed25519";

/// The signature proof block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureProof {
    /// The signature algorithm; always [`SIGNATURE_ALGORITHM`] for
    /// certificates issued by this stack.
    pub algorithm: String,
    /// The detached signature over the canonical payload.
    pub value: Ed25519Signature,
    /// The payload the signature covers.
    pub signed_payload: SignedPayload,
}

/// The chain-linkage proof block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainProof {
    /// The checkpoint's chain hash.
    pub chain_hash: HexDigest,
    /// The predecessor's chain hash; `null` for genesis.
    pub prev_chain_hash: Option<HexDigest>,
    /// The checkpoint's 0-based position in its chain.
    pub position: u64,
}

/// The Merkle inclusion proof block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// The checkpoint's leaf hash.
    pub leaf_hash: HexDigest,
    /// The leaf's 0-based index in the tree.
    pub leaf_index: usize,
    /// The bottom-up sibling path.
    pub inclusion_proof: Vec<ProofStep>,
    /// The tree root the proof commits to.
    pub root: HexDigest,
    /// The number of leaves in the tree.
    pub tree_size: usize,
}

impl From<InclusionProof> for MerkleProof {
    fn from(proof: InclusionProof) -> Self {
        Self {
            leaf_hash: proof.leaf_hash,
            leaf_index: proof.leaf_index,
            inclusion_proof: proof.siblings,
            root: proof.root,
            tree_size: proof.tree_size,
        }
    }
}

impl MerkleProof {
    /// Rebuild the accumulator-level proof for verification.
    pub fn to_inclusion_proof(&self) -> InclusionProof {
        InclusionProof {
            leaf_hash: self.leaf_hash.clone(),
            leaf_index: self.leaf_index,
            siblings: self.inclusion_proof.clone(),
            root: self.root.clone(),
            tree_size: self.tree_size,
        }
    }
}

/// The three proof blocks of a certificate.
///
/// `merkle` is `null` only when the checkpoint has not yet been folded
/// into any published tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateProofs {
    /// Signature over the canonical payload.
    pub signature: SignatureProof,
    /// Chain-linkage proof.
    pub chain: ChainProof,
    /// Merkle inclusion proof, if accumulator state existed at issuance.
    pub merkle: Option<MerkleProof>,
}

/// The input-commitment metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputCommitments {
    /// The combined input commitment.
    pub input_commitment: HexDigest,
    /// The thinking-block digest used upstream.
    pub thinking_block_hash: HexDigest,
}

/// The externally published integrity certificate for one checkpoint.
///
/// Never mutated after issuance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrityCertificate {
    /// Identifier of this certificate (`cert-` prefixed).
    pub certificate_id: CertificateId,
    /// Identifier of the attested checkpoint.
    pub checkpoint_id: CheckpointId,
    /// The claimed verdict.
    pub verdict: Verdict,
    /// When the certificate was issued (UTC).
    pub issued_at: Timestamp,
    /// The proof blocks.
    pub proofs: CertificateProofs,
    /// The input-commitment metadata.
    pub input_commitments: InputCommitments,
}
