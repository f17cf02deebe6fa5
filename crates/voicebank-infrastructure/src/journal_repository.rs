//! File-backed recording journal.
//!
//! The journal is a JSON array of confirmed recordings, one entry per
//! sentence id with the confirmation timestamp. It implements the core
//! `RecordedSetRepository` trait: loads collapse entries into an id set,
//! `record` appends at most once per id, and every rewrite goes through a
//! temp file + rename so a crash never leaves a half-written journal.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;
use voicebank_core::session::RecordedSetRepository;

/// One confirmed recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedEntry {
    /// Id of the recorded sentence.
    pub sentence_id: String,
    /// Timestamp when the recording was confirmed (ISO 8601 format).
    pub recorded_at: String,
}

/// JSON-file journal of confirmed recordings.
pub struct JsonJournalRepository {
    path: PathBuf,
    /// Serializes read-modify-write cycles in `record`.
    write_lock: Mutex<()>,
}

impl JsonJournalRepository {
    /// Creates a journal backed by the given file path.
    ///
    /// The file does not have to exist yet; a missing journal reads as an
    /// empty set and is created on the first `record`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the journal file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn read_entries(&self) -> Result<Vec<RecordedEntry>> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse journal: {}", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read journal: {}", self.path.display())),
        }
    }

    async fn write_entries(&self, entries: &[RecordedEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create journal directory")?;
        }

        let raw = serde_json::to_string_pretty(entries).context("Failed to serialize journal")?;

        // Write-then-rename keeps the journal parseable if we crash mid-write.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)
            .await
            .with_context(|| format!("Failed to write journal: {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Failed to replace journal: {}", self.path.display()))?;

        Ok(())
    }
}

#[async_trait]
impl RecordedSetRepository for JsonJournalRepository {
    async fn load(&self) -> Result<HashSet<String>> {
        Ok(self
            .read_entries()
            .await?
            .into_iter()
            .map(|e| e.sentence_id)
            .collect())
    }

    async fn record(&self, sentence_id: &str) -> Result<u32> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        if !entries.iter().any(|e| e.sentence_id == sentence_id) {
            entries.push(RecordedEntry {
                sentence_id: sentence_id.to_string(),
                recorded_at: chrono::Utc::now().to_rfc3339(),
            });
            self.write_entries(&entries).await?;
            tracing::debug!("Recorded sentence '{}'", sentence_id);
        }

        let distinct: HashSet<&str> = entries.iter().map(|e| e.sentence_id.as_str()).collect();
        Ok(distinct.len() as u32)
    }

    async fn total(&self) -> Result<u32> {
        Ok(self.load().await?.len() as u32)
    }
}
