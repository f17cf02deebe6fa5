//! CLI command implementations.

pub mod corpus;
pub mod progress;
pub mod record;
pub mod session;

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use voicebank_core::config::VoicebankConfig;
use voicebank_core::corpus::Corpus;
use voicebank_infrastructure::{JsonJournalRepository, VoicebankPaths, load_config, load_corpus};

/// Resolved execution context shared by all commands.
pub struct Context {
    pub config: VoicebankConfig,
    pub corpus: Arc<Corpus>,
    pub journal: JsonJournalRepository,
}

impl Context {
    /// Resolves configuration, corpus, and journal from CLI flags and
    /// platform defaults.
    pub async fn resolve(
        config_path: Option<PathBuf>,
        corpus_path: Option<PathBuf>,
        journal_path: Option<PathBuf>,
    ) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => VoicebankPaths::config_file()?,
        };
        let config = load_config(&config_path).await?;

        let corpus_path = match corpus_path {
            Some(path) => path,
            None => VoicebankPaths::corpus_file(&config.corpus.path)?,
        };
        let corpus = Arc::new(load_corpus(&corpus_path).await?);

        let journal_path = match journal_path {
            Some(path) => path,
            None => VoicebankPaths::journal_file()?,
        };
        let journal = JsonJournalRepository::new(journal_path);

        Ok(Self {
            config,
            corpus,
            journal,
        })
    }
}
