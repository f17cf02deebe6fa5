//! Core domain logic for the Voicebank voice-donation platform.
//!
//! This crate decides *what to present next* to a contributor: it builds
//! session batches of sentences from an immutable corpus (anchor sentences
//! first, then a randomized, repeat-avoiding pool selection) and computes
//! the reward-milestone ladder from the contributor's lifetime recording
//! count.
//!
//! Everything here is pure, synchronous computation. Persistence is reached
//! only through the [`session::RecordedSetRepository`] trait; randomness is
//! supplied by the caller so selection is deterministic under test.

pub mod config;
pub mod corpus;
pub mod error;
pub mod session;

// Re-export common error type
pub use error::VoicebankError;
