//! File-backed implementations for the Voicebank engine.
//!
//! This crate owns everything that touches the filesystem: loading the
//! corpus JSON, persisting the recording journal, reading configuration,
//! and resolving platform paths. The domain crate only sees the resulting
//! values and the `RecordedSetRepository` trait.

pub mod config_loader;
pub mod corpus_loader;
pub mod journal_repository;
pub mod paths;

pub use config_loader::load_config;
pub use corpus_loader::load_corpus;
pub use journal_repository::{JsonJournalRepository, RecordedEntry};
pub use paths::{PathError, VoicebankPaths};
