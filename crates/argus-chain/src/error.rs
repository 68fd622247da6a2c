//! # Chain Error Types
//!
//! Structural errors for chain operations. Tampering and hash mismatches
//! are NOT errors — they come back as [`ChainVerification`] values from the
//! verify functions. These variants cover caller contract violations only.
//!
//! [`ChainVerification`]: crate::linker::ChainVerification

use argus_core::AgentId;
use thiserror::Error;

/// Errors from chain operations.
#[derive(Error, Debug)]
pub enum ChainError {
    /// A writer is already outstanding for this agent. Two concurrent
    /// appends racing on the same previous hash would fork the chain, so
    /// acquisition is exclusive per agent.
    #[error("a chain writer is already active for {agent_id}")]
    WriterActive {
        /// The agent whose writer is already held.
        agent_id: AgentId,
    },
}
