//! # Certificate Issuance
//!
//! Assembles an [`IntegrityCertificate`] from a sealed checkpoint, its
//! chain position, and (when accumulator state exists) the current leaf
//! list. The issuer holds the signing identity; everything else is supplied
//! per call, so issuance stays a pure composition of the other components'
//! outputs plus one signature.

use argus_chain::ChainCheckpoint;
use argus_core::{CertificateId, HexDigest, Timestamp};
use argus_crypto::{Ed25519KeyPair, Ed25519PublicKey};
use argus_merkle::{compute_leaf_hash, generate_inclusion_proof};

use crate::certificate::{
    CertificateProofs, ChainProof, InputCommitments, IntegrityCertificate, MerkleProof,
    SignatureProof, SIGNATURE_ALGORITHM,
};
use crate::error::CertificateError;
use crate::payload::SignedPayload;

/// The accumulator state a certificate's Merkle proof is generated from.
#[derive(Debug, Clone, Copy)]
pub struct MerkleContext<'a> {
    /// The full ordered leaf-hash list at issuance time.
    pub leaf_hashes: &'a [HexDigest],
    /// The subject checkpoint's leaf index.
    pub leaf_index: usize,
}

/// Issues integrity certificates under one Ed25519 signing identity.
pub struct CertificateIssuer {
    keypair: Ed25519KeyPair,
}

impl CertificateIssuer {
    /// Create an issuer from a signing key pair.
    pub fn new(keypair: Ed25519KeyPair) -> Self {
        Self { keypair }
    }

    /// The public key consumers verify against.
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// Issue a certificate for a sealed checkpoint.
    ///
    /// `position` is the checkpoint's 0-based index in its chain. Pass
    /// `merkle: None` when the checkpoint has not been folded into any
    /// published tree; the certificate's Merkle block is `null` and the
    /// remaining proofs still verify independently.
    ///
    /// # Errors
    ///
    /// - [`CertificateError::Canonicalization`] if the payload cannot be
    ///   canonicalized.
    /// - [`CertificateError::Merkle`] for an empty tree or bad index.
    /// - [`CertificateError::LeafMismatch`] if the leaf at the supplied
    ///   index is not this checkpoint's leaf.
    pub fn issue(
        &self,
        checkpoint: &ChainCheckpoint,
        position: u64,
        merkle: Option<MerkleContext<'_>>,
    ) -> Result<IntegrityCertificate, CertificateError> {
        let payload = SignedPayload::from_checkpoint(checkpoint);
        let canonical = payload.canonical_bytes()?;
        let signature = self.keypair.sign(&canonical);

        let merkle_block = match merkle {
            None => None,
            Some(ctx) => {
                let proof = generate_inclusion_proof(ctx.leaf_hashes, ctx.leaf_index)?;
                let expected_leaf = compute_leaf_hash(&payload.leaf_data());
                if proof.leaf_hash != expected_leaf {
                    return Err(CertificateError::LeafMismatch {
                        index: ctx.leaf_index,
                        checkpoint_id: payload.checkpoint_id.clone(),
                    });
                }
                Some(MerkleProof::from(proof))
            }
        };

        let certificate = IntegrityCertificate {
            certificate_id: CertificateId::mint(),
            checkpoint_id: payload.checkpoint_id.clone(),
            verdict: payload.verdict,
            issued_at: Timestamp::now(),
            input_commitments: InputCommitments {
                input_commitment: payload.input_commitment.clone(),
                thinking_block_hash: payload.thinking_block_hash.clone(),
            },
            proofs: CertificateProofs {
                signature: SignatureProof {
                    algorithm: SIGNATURE_ALGORITHM.to_string(),
                    value: signature,
                    signed_payload: payload,
                },
                chain: ChainProof {
                    chain_hash: checkpoint.chain_hash.clone(),
                    prev_chain_hash: checkpoint.input.prev_chain_hash.clone(),
                    position,
                },
                merkle: merkle_block,
            },
        };

        tracing::debug!(
            certificate = %certificate.certificate_id,
            checkpoint = %certificate.checkpoint_id,
            merkle = certificate.proofs.merkle.is_some(),
            "integrity certificate issued"
        );
        Ok(certificate)
    }
}

impl std::fmt::Debug for CertificateIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateIssuer")
            .field("public_key", &self.keypair.public_key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_chain::ChainInput;
    use argus_core::{CheckpointId, Verdict};
    use argus_merkle::LeafData;

    fn digest(n: u8) -> HexDigest {
        HexDigest::from_bytes(&[n; 32])
    }

    fn sealed_checkpoint() -> ChainCheckpoint {
        ChainCheckpoint::seal(ChainInput {
            prev_chain_hash: None,
            checkpoint_id: CheckpointId::new("cp-0").unwrap(),
            verdict: Verdict::Compliant,
            thinking_block_hash: digest(1),
            input_commitment: digest(2),
            timestamp: argus_core::Timestamp::parse("2026-08-01T12:00:00Z").unwrap(),
        })
    }

    fn leaf_for(cp: &ChainCheckpoint) -> HexDigest {
        compute_leaf_hash(&LeafData {
            checkpoint_id: cp.input.checkpoint_id.clone(),
            verdict: cp.input.verdict,
            thinking_block_hash: cp.input.thinking_block_hash.clone(),
            chain_hash: cp.chain_hash.clone(),
            timestamp: cp.input.timestamp,
        })
    }

    #[test]
    fn issues_without_merkle_context() {
        let issuer = CertificateIssuer::new(Ed25519KeyPair::generate());
        let cp = sealed_checkpoint();
        let cert = issuer.issue(&cp, 0, None).unwrap();

        assert!(cert.proofs.merkle.is_none());
        assert_eq!(cert.proofs.signature.algorithm, SIGNATURE_ALGORITHM);
        assert_eq!(cert.proofs.chain.chain_hash, cp.chain_hash);
        assert_eq!(cert.proofs.chain.position, 0);
        assert_eq!(cert.checkpoint_id, cp.input.checkpoint_id);
        assert!(cert.certificate_id.as_str().starts_with("cert-"));
    }

    #[test]
    fn issues_with_merkle_context() {
        let issuer = CertificateIssuer::new(Ed25519KeyPair::generate());
        let cp = sealed_checkpoint();
        let leaves = vec![digest(50), leaf_for(&cp), digest(51)];
        let cert = issuer
            .issue(
                &cp,
                1,
                Some(MerkleContext {
                    leaf_hashes: &leaves,
                    leaf_index: 1,
                }),
            )
            .unwrap();

        let merkle = cert.proofs.merkle.unwrap();
        assert_eq!(merkle.leaf_index, 1);
        assert_eq!(merkle.tree_size, 3);
        assert_eq!(merkle.leaf_hash, leaf_for(&cp));
    }

    #[test]
    fn wrong_leaf_index_is_rejected() {
        let issuer = CertificateIssuer::new(Ed25519KeyPair::generate());
        let cp = sealed_checkpoint();
        let leaves = vec![digest(50), leaf_for(&cp), digest(51)];
        let result = issuer.issue(
            &cp,
            1,
            Some(MerkleContext {
                leaf_hashes: &leaves,
                leaf_index: 0,
            }),
        );
        assert!(matches!(result, Err(CertificateError::LeafMismatch { index: 0, .. })));
    }

    #[test]
    fn empty_tree_context_is_rejected() {
        let issuer = CertificateIssuer::new(Ed25519KeyPair::generate());
        let cp = sealed_checkpoint();
        let result = issuer.issue(
            &cp,
            0,
            Some(MerkleContext {
                leaf_hashes: &[],
                leaf_index: 0,
            }),
        );
        assert!(matches!(result, Err(CertificateError::Merkle(_))));
    }

    #[test]
    fn minted_certificate_ids_are_fresh() {
        let issuer = CertificateIssuer::new(Ed25519KeyPair::generate());
        let cp = sealed_checkpoint();
        let a = issuer.issue(&cp, 0, None).unwrap();
        let b = issuer.issue(&cp, 0, None).unwrap();
        assert_ne!(a.certificate_id, b.certificate_id);
    }

    #[test]
    fn debug_shows_public_key_not_private() {
        let issuer = CertificateIssuer::new(Ed25519KeyPair::generate());
        let debug = format!("{issuer:?}");
        assert!(debug.contains("public_key"));
        assert!(!debug.contains("SigningKey"));
    }
}
