//! # Input Commitments
//!
//! Collapses the structured record that produced a checkpoint's verdict —
//! the governing policy card, the value statements in force, the prior
//! window context, and the model/prompt-template identifiers — into one
//! digest. The commitment binds the checkpoint to exactly the inputs the
//! evaluator saw: change any nested field and the commitment changes;
//! reorder fields or object keys and it does not.
//!
//! ## Security Invariant
//!
//! Commitments flow through [`CanonicalBytes`] → SHA-256. Key order never
//! affects the digest (JCS sorts keys), so an auditor can rebuild the
//! commitment from a record stored in any field order.

use serde::{Deserialize, Serialize};

use argus_core::error::CanonicalizationError;
use argus_core::{sha256_hex, CanonicalBytes, HexDigest};

/// The policy card governing the evaluated action.
///
/// `values` is intentionally extensible — cards carry evaluator-defined
/// structure, and the commitment covers whatever is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyCard {
    /// Identifier of the card.
    pub card_id: String,
    /// The card's values, as evaluator-defined JSON.
    pub values: serde_json::Value,
}

/// The full structured record committed by one checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitmentInput {
    /// The governing policy card.
    pub card: PolicyCard,
    /// The value statements in force during evaluation.
    pub value_statements: Vec<String>,
    /// Context carried over from the prior evaluation window.
    pub window_context: serde_json::Value,
    /// Version identifier of the evaluating model.
    pub model_version: String,
    /// Version identifier of the prompt template.
    pub prompt_template_version: String,
}

/// Compute the input commitment for a checkpoint.
///
/// Pure and idempotent: identical records produce identical digests, and
/// every declared field independently affects the output.
///
/// # Errors
///
/// Returns a [`CanonicalizationError`] if the record contains float values
/// — a caller contract violation, not a runtime condition to recover from.
pub fn compute_input_commitment(
    input: &CommitmentInput,
) -> Result<HexDigest, CanonicalizationError> {
    Ok(sha256_hex(&CanonicalBytes::new(input)?))
}
