//! # argus-chain — Checkpoint Hash Chain
//!
//! Links every recorded decision checkpoint to its predecessor by hash, so
//! that deletion, reordering, and field tampering anywhere in an agent's
//! checkpoint log are mechanically detectable — and distinguishable — from
//! the stored data alone.
//!
//! The crate provides:
//!
//! - **Input commitments** ([`commitment`]): collapse the structured record
//!   that produced a verdict (policy card, value statements, window
//!   context, model identifiers) into one digest via the canonical JSON
//!   pipeline.
//! - **Chain linking** ([`checkpoint`], [`linker`]): compute a checkpoint's
//!   chain hash from its fields and its predecessor's hash, verify a single
//!   link, and verify an entire ordered sequence with first-break
//!   localization.
//! - **Single-writer handles** ([`writer`]): at most one
//!   [`ChainWriter`](writer::ChainWriter) per agent at a time, making the
//!   no-concurrent-appends contract a typed API instead of caller
//!   discipline.
//!
//! All hash computations here are pure functions of their declared inputs —
//! no clock, no randomness — so independent recomputation from stored
//! fields always reproduces the same digest.

pub mod checkpoint;
pub mod commitment;
pub mod error;
pub mod linker;
pub mod writer;

// Re-export primary types.
pub use checkpoint::{ChainCheckpoint, ChainInput, GENESIS_SENTINEL};
pub use commitment::{compute_input_commitment, CommitmentInput, PolicyCard};
pub use error::ChainError;
pub use linker::{
    compute_chain_hash, verify_chain_link, verify_chain_sequence, ChainBreakKind,
    ChainVerification,
};
pub use writer::{ChainTip, ChainWriter, ChainWriterRegistry, CheckpointDraft};
