//! Session domain model.
//!
//! A session is one ordered batch of sentences offered to the contributor
//! before a fresh batch is built. It has no persisted identity: when the
//! cursor reaches the end (or the contributor skips to the end), the caller
//! asks the selector for a new batch and replaces the session wholesale.

use crate::corpus::Sentence;
use serde::{Deserialize, Serialize};

/// One ordered batch of sentences with a presentation cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingSession {
    /// Sentences in presentation order, anchors first.
    phrases: Vec<Sentence>,
    /// Index of the sentence currently presented.
    position: usize,
    /// Timestamp when the batch was built (ISO 8601 format).
    pub started_at: String,
}

impl RecordingSession {
    /// Wraps a freshly built batch.
    pub fn new(phrases: Vec<Sentence>) -> Self {
        Self {
            phrases,
            position: 0,
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// The sentence currently presented, or `None` once exhausted.
    pub fn current(&self) -> Option<&Sentence> {
        self.phrases.get(self.position)
    }

    /// Moves the cursor to the next sentence and returns it.
    pub fn advance(&mut self) -> Option<&Sentence> {
        if self.position < self.phrases.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Exhausts the session, forcing the caller to build a fresh batch.
    pub fn skip_to_end(&mut self) {
        self.position = self.phrases.len();
    }

    /// True once every sentence has been presented.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.phrases.len()
    }

    /// Number of sentences not yet presented.
    pub fn remaining(&self) -> usize {
        self.phrases.len() - self.position.min(self.phrases.len())
    }

    /// Total batch length.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// True for a zero-length batch (fully recorded anchor-only corpus).
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// The full batch, in presentation order.
    pub fn phrases(&self) -> &[Sentence] {
        &self.phrases
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.position
    }
}
