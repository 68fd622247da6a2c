//! # Single-Writer Chain Handles
//!
//! Appending a checkpoint requires knowing the previous checkpoint's chain
//! hash, so two concurrent appends racing on the same tip would both
//! believe they extend it and fork the chain. [`ChainWriterRegistry`]
//! makes the at-most-one-append-per-agent contract a typed API: a
//! [`ChainWriter`] for an agent can be held by at most one owner at a
//! time, and it is the only thing that can thread `prev_chain_hash`
//! through successive appends.
//!
//! Verification never needs a writer — it reads already-committed,
//! immutable checkpoint data and runs freely concurrent with appends.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use argus_core::{AgentId, CheckpointId, HexDigest, Timestamp, Verdict};

use crate::checkpoint::{ChainCheckpoint, ChainInput};
use crate::error::ChainError;

/// The tip of a persisted chain: the last checkpoint's hash and 0-based
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTip {
    /// The last checkpoint's chain hash.
    pub chain_hash: HexDigest,
    /// The last checkpoint's 0-based position in the chain.
    pub position: u64,
}

/// The per-checkpoint fields an append supplies; the writer threads the
/// previous hash itself.
#[derive(Debug, Clone)]
pub struct CheckpointDraft {
    /// Identifier of the new checkpoint.
    pub checkpoint_id: CheckpointId,
    /// The verdict being recorded.
    pub verdict: Verdict,
    /// Digest of the evaluator's reasoning block.
    pub thinking_block_hash: HexDigest,
    /// The input commitment for this checkpoint.
    pub input_commitment: HexDigest,
    /// When the checkpoint was recorded.
    pub timestamp: Timestamp,
}

/// Hands out at most one [`ChainWriter`] per agent at a time.
///
/// Cloning the registry shares the underlying active-agent set, so every
/// component that can append must go through the same registry instance
/// (or a clone of it).
#[derive(Debug, Clone, Default)]
pub struct ChainWriterRegistry {
    active: Arc<Mutex<HashSet<AgentId>>>,
}

impl ChainWriterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the writer for an agent, optionally resuming at a persisted
    /// tip.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::WriterActive`] while another writer for the
    /// same agent is outstanding.
    pub fn acquire(
        &self,
        agent_id: AgentId,
        tip: Option<ChainTip>,
    ) -> Result<ChainWriter, ChainError> {
        let mut active = self.active.lock();
        if !active.insert(agent_id.clone()) {
            return Err(ChainError::WriterActive { agent_id });
        }
        drop(active);
        tracing::debug!(agent = %agent_id, resumed = tip.is_some(), "chain writer acquired");
        Ok(ChainWriter {
            active: Arc::clone(&self.active),
            agent_id,
            tip,
        })
    }

    /// Whether a writer is currently outstanding for an agent.
    pub fn is_active(&self, agent_id: &AgentId) -> bool {
        self.active.lock().contains(agent_id)
    }
}

/// The exclusive append handle for one agent's chain.
///
/// Released on drop; acquire a new writer to continue appending.
#[derive(Debug)]
pub struct ChainWriter {
    active: Arc<Mutex<HashSet<AgentId>>>,
    agent_id: AgentId,
    tip: Option<ChainTip>,
}

impl ChainWriter {
    /// The agent this writer appends for.
    pub fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    /// The current tip, if any checkpoint has been appended or resumed.
    pub fn tip(&self) -> Option<&ChainTip> {
        self.tip.as_ref()
    }

    /// The 0-based position the next appended checkpoint will occupy.
    pub fn next_position(&self) -> u64 {
        self.tip.as_ref().map_or(0, |t| t.position + 1)
    }

    /// Append a checkpoint, threading the previous chain hash from the tip.
    ///
    /// The first append on a fresh writer produces the genesis checkpoint
    /// (`prev_chain_hash` null). The writer's tip advances to the new
    /// checkpoint.
    pub fn append(&mut self, draft: CheckpointDraft) -> ChainCheckpoint {
        let position = self.next_position();
        let input = ChainInput {
            prev_chain_hash: self.tip.as_ref().map(|t| t.chain_hash.clone()),
            checkpoint_id: draft.checkpoint_id,
            verdict: draft.verdict,
            thinking_block_hash: draft.thinking_block_hash,
            input_commitment: draft.input_commitment,
            timestamp: draft.timestamp,
        };
        let checkpoint = ChainCheckpoint::seal(input);
        self.tip = Some(ChainTip {
            chain_hash: checkpoint.chain_hash.clone(),
            position,
        });
        tracing::debug!(
            agent = %self.agent_id,
            checkpoint = %checkpoint.input.checkpoint_id,
            position,
            "checkpoint appended"
        );
        checkpoint
    }
}

impl Drop for ChainWriter {
    fn drop(&mut self) {
        self.active.lock().remove(&self.agent_id);
        tracing::debug!(agent = %self.agent_id, "chain writer released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linker::verify_chain_sequence;

    fn digest(n: u8) -> HexDigest {
        HexDigest::from_bytes(&[n; 32])
    }

    fn draft(i: usize) -> CheckpointDraft {
        CheckpointDraft {
            checkpoint_id: CheckpointId::new(format!("cp-{i}")).unwrap(),
            verdict: Verdict::Compliant,
            thinking_block_hash: digest(10 + i as u8),
            input_commitment: digest(40 + i as u8),
            timestamp: Timestamp::parse(&format!("2026-08-01T12:00:{i:02}Z")).unwrap(),
        }
    }

    #[test]
    fn first_append_is_genesis() {
        let registry = ChainWriterRegistry::new();
        let mut writer = registry.acquire(AgentId::new(), None).unwrap();
        assert_eq!(writer.next_position(), 0);

        let genesis = writer.append(draft(0));
        assert!(genesis.is_genesis());
        assert_eq!(writer.tip().unwrap().position, 0);
        assert_eq!(writer.tip().unwrap().chain_hash, genesis.chain_hash);
    }

    #[test]
    fn appends_thread_prev_hash_and_verify() {
        let registry = ChainWriterRegistry::new();
        let mut writer = registry.acquire(AgentId::new(), None).unwrap();
        let chain: Vec<ChainCheckpoint> = (0..5).map(|i| writer.append(draft(i))).collect();

        for i in 1..5 {
            assert_eq!(
                chain[i].input.prev_chain_hash.as_ref(),
                Some(&chain[i - 1].chain_hash)
            );
        }
        let result = verify_chain_sequence(&chain);
        assert!(result.valid);
        assert_eq!(result.links_verified, 5);
    }

    #[test]
    fn second_acquire_fails_while_writer_lives() {
        let registry = ChainWriterRegistry::new();
        let agent = AgentId::new();
        let writer = registry.acquire(agent.clone(), None).unwrap();
        assert!(registry.is_active(&agent));

        match registry.acquire(agent.clone(), None) {
            Err(ChainError::WriterActive { agent_id }) => assert_eq!(agent_id, agent),
            other => panic!("expected WriterActive, got {other:?}"),
        }
        drop(writer);
    }

    #[test]
    fn drop_releases_the_agent() {
        let registry = ChainWriterRegistry::new();
        let agent = AgentId::new();
        let writer = registry.acquire(agent.clone(), None).unwrap();
        drop(writer);
        assert!(!registry.is_active(&agent));
        assert!(registry.acquire(agent, None).is_ok());
    }

    #[test]
    fn different_agents_hold_writers_concurrently() {
        let registry = ChainWriterRegistry::new();
        let w1 = registry.acquire(AgentId::new(), None);
        let w2 = registry.acquire(AgentId::new(), None);
        assert!(w1.is_ok());
        assert!(w2.is_ok());
    }

    #[test]
    fn resume_from_tip_continues_the_chain() {
        let registry = ChainWriterRegistry::new();
        let agent = AgentId::new();

        let (first_two, tip) = {
            let mut writer = registry.acquire(agent.clone(), None).unwrap();
            let chain: Vec<ChainCheckpoint> = (0..2).map(|i| writer.append(draft(i))).collect();
            (chain, writer.tip().cloned())
        };

        let mut writer = registry.acquire(agent, tip).unwrap();
        assert_eq!(writer.next_position(), 2);
        let third = writer.append(draft(2));

        let mut chain = first_two;
        chain.push(third);
        assert!(verify_chain_sequence(&chain).valid);
    }

    #[test]
    fn cloned_registry_shares_the_active_set() {
        let registry = ChainWriterRegistry::new();
        let clone = registry.clone();
        let agent = AgentId::new();
        let _writer = registry.acquire(agent.clone(), None).unwrap();
        assert!(clone.is_active(&agent));
        assert!(clone.acquire(agent, None).is_err());
    }
}
