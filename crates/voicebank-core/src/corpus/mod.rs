//! Sentence corpus domain module.
//!
//! The corpus is the fixed, versioned list of sentences contributors are
//! asked to record. It is loaded once at startup, validated, partitioned
//! into anchors and pool, and treated as read-only for the lifetime of the
//! process.

mod model;

// Re-export public API
pub use model::{Corpus, Sentence, SentenceCategory};
