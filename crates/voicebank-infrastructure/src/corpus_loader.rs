//! Corpus file loading.
//!
//! The corpus is a JSON array of sentence records, loaded once at startup
//! and validated/partitioned by `Corpus::new`. Everything downstream holds
//! the corpus behind an `Arc` and treats it as read-only.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use voicebank_core::corpus::{Corpus, Sentence};

/// Loads and validates a corpus JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON array of
/// sentences, or fails corpus validation (empty, duplicate ids).
pub async fn load_corpus(path: impl AsRef<Path>) -> Result<Corpus> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read corpus file: {}", path.display()))?;

    let sentences: Vec<Sentence> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse corpus file: {}", path.display()))?;

    let corpus = Corpus::new(sentences)?;
    tracing::debug!(
        "Loaded corpus from {}: {} anchors, {} pool sentences",
        path.display(),
        corpus.anchors().len(),
        corpus.pool().len()
    );

    Ok(corpus)
}
