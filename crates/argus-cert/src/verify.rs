//! # Certificate Verification
//!
//! The consumer-side re-verification path: everything here runs from a
//! certificate and a published public key alone, with no access to the
//! issuing server. Mismatches are reported, never thrown — a forged
//! certificate is an expected input.

use serde::{Deserialize, Serialize};

use argus_chain::compute_chain_hash;
use argus_crypto::{verify_with_public_key, Ed25519PublicKey, Ed25519Signature};
use argus_merkle::{compute_leaf_hash, verify_inclusion_proof};

use crate::certificate::{IntegrityCertificate, SIGNATURE_ALGORITHM};
use crate::payload::SignedPayload;

/// Verify a detached signature over a canonical payload.
///
/// Fail-closed boolean: a wrong key, a tampered payload, or a payload that
/// cannot be canonicalized all return `false`.
pub fn verify_checkpoint_signature(
    signature: &Ed25519Signature,
    payload: &SignedPayload,
    public_key: &Ed25519PublicKey,
) -> bool {
    let Ok(canonical) = payload.canonical_bytes() else {
        return false;
    };
    verify_with_public_key(&canonical, signature, public_key).is_ok()
}

/// The result of independently re-verifying a certificate.
///
/// `valid` is the conjunction of every sub-check; the sub-checks are
/// reported individually so a consumer can tell *which* proof a forged
/// certificate fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateVerification {
    /// The signature verifies over the canonical payload.
    pub signature_valid: bool,
    /// The chain hash recomputes from the payload fields and the chain
    /// proof's previous hash, and the payload and chain proof agree on it.
    pub chain_valid: bool,
    /// The certificate's subject fields agree with the signed payload.
    pub payload_consistent: bool,
    /// The Merkle proof verifies and binds to this checkpoint's leaf;
    /// `None` when the certificate carries no Merkle block.
    pub merkle_valid: Option<bool>,
    /// Conjunction of all sub-checks.
    pub valid: bool,
    /// Human-readable summary of the outcome.
    pub details: String,
}

/// Independently re-verify a certificate against a published public key.
///
/// Runs the full consumer-side pipeline: signature verification, chain
/// hash recomputation, subject/payload consistency, and Merkle inclusion
/// verification (when a Merkle block is present).
pub fn verify_certificate(
    certificate: &IntegrityCertificate,
    public_key: &Ed25519PublicKey,
) -> CertificateVerification {
    let signature = &certificate.proofs.signature;
    let payload = &signature.signed_payload;
    let chain = &certificate.proofs.chain;

    let signature_valid = signature.algorithm == SIGNATURE_ALGORITHM
        && verify_checkpoint_signature(&signature.value, payload, public_key);

    let recomputed = compute_chain_hash(&payload.chain_input(chain.prev_chain_hash.clone()));
    let chain_valid = recomputed == chain.chain_hash && payload.chain_hash == chain.chain_hash;

    let payload_consistent = certificate.checkpoint_id == payload.checkpoint_id
        && certificate.verdict == payload.verdict
        && certificate.input_commitments.input_commitment == payload.input_commitment
        && certificate.input_commitments.thinking_block_hash == payload.thinking_block_hash;

    let merkle_valid = certificate.proofs.merkle.as_ref().map(|merkle| {
        let proof = merkle.to_inclusion_proof();
        let expected_leaf = compute_leaf_hash(&payload.leaf_data());
        merkle.leaf_hash == expected_leaf
            && verify_inclusion_proof(&proof, &expected_leaf, &merkle.root)
    });

    let valid = signature_valid && chain_valid && payload_consistent && merkle_valid.unwrap_or(true);

    let details = if valid {
        match merkle_valid {
            Some(_) => "signature, chain, and merkle proofs verified".to_string(),
            None => "signature and chain proofs verified; no merkle block present".to_string(),
        }
    } else {
        let mut failed = Vec::new();
        if !signature_valid {
            failed.push("signature");
        }
        if !chain_valid {
            failed.push("chain");
        }
        if !payload_consistent {
            failed.push("payload consistency");
        }
        if merkle_valid == Some(false) {
            failed.push("merkle");
        }
        format!("verification failed: {}", failed.join(", "))
    };

    if !valid {
        tracing::warn!(
            certificate = %certificate.certificate_id,
            %details,
            "certificate failed verification"
        );
    }

    CertificateVerification {
        signature_valid,
        chain_valid,
        payload_consistent,
        merkle_valid,
        valid,
        details,
    }
}
