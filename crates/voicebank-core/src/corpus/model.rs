//! Corpus domain model.
//!
//! This module contains the `Sentence` entry type and the immutable
//! `Corpus` that partitions entries into anchors and pool exactly once
//! at construction.

use crate::error::{Result, VoicebankError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use strum_macros::{Display, EnumString};

/// Category of a corpus sentence.
///
/// `Anchor` is distinguished from all other ("pool") categories: anchor
/// sentences secure phonetic/acoustic coverage and are presented before any
/// pool sentence, in corpus order, until recorded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SentenceCategory {
    /// Fixed, high-priority sentence required for acoustic coverage.
    Anchor,
    /// Everyday conversational phrase.
    Everyday,
    /// Emotionally colored phrase.
    Emotion,
    /// Interrogative phrase.
    Question,
    /// Imperative/command phrase.
    Command,
    /// Narrative fragment.
    Story,
}

impl SentenceCategory {
    /// Returns true for the anchor category.
    pub fn is_anchor(&self) -> bool {
        matches!(self, Self::Anchor)
    }
}

/// A single immutable corpus entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Unique identifier, stable across sessions.
    pub id: String,
    /// The literal prompt shown to the contributor.
    pub text: String,
    /// Category; `anchor` entries are prioritized by the selector.
    pub category: SentenceCategory,
    /// Word count, used downstream for the minimum-duration rule.
    pub word_count: u32,
    /// Presentational emotion hint; not used by selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    /// Presentational context hint; not used by selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Sentence {
    /// Returns true if this sentence belongs to the anchor partition.
    pub fn is_anchor(&self) -> bool {
        self.category.is_anchor()
    }
}

/// Location of a sentence within the corpus partition.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Anchor(usize),
    Pool(usize),
}

/// The full sentence corpus, partitioned once into anchors and pool.
///
/// Construction validates ids (non-empty, unique) and splits the entries
/// into the two disjoint subsets the selector operates on. The partition
/// preserves corpus order, which matters for anchors: they are presented
/// in the order they appear here, never shuffled.
#[derive(Debug, Clone)]
pub struct Corpus {
    anchors: Vec<Sentence>,
    pool: Vec<Sentence>,
    by_id: HashMap<String, Slot>,
}

impl Corpus {
    /// Builds a corpus from raw entries.
    ///
    /// # Errors
    ///
    /// Returns `VoicebankError::Corpus` if the entry list is empty, if any
    /// id is empty, or if two entries share an id.
    pub fn new(sentences: Vec<Sentence>) -> Result<Self> {
        if sentences.is_empty() {
            return Err(VoicebankError::corpus("corpus contains no sentences"));
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(sentences.len());
        for sentence in &sentences {
            if sentence.id.is_empty() {
                return Err(VoicebankError::corpus("sentence with empty id"));
            }
            if !seen.insert(&sentence.id) {
                return Err(VoicebankError::corpus(format!(
                    "duplicate sentence id: '{}'",
                    sentence.id
                )));
            }
        }

        let mut anchors = Vec::new();
        let mut pool = Vec::new();
        let mut by_id = HashMap::with_capacity(sentences.len());
        for sentence in sentences {
            let id = sentence.id.clone();
            let slot = if sentence.is_anchor() {
                anchors.push(sentence);
                Slot::Anchor(anchors.len() - 1)
            } else {
                pool.push(sentence);
                Slot::Pool(pool.len() - 1)
            };
            by_id.insert(id, slot);
        }

        Ok(Self {
            anchors,
            pool,
            by_id,
        })
    }

    /// Anchor sentences, in corpus order.
    pub fn anchors(&self) -> &[Sentence] {
        &self.anchors
    }

    /// Pool (non-anchor) sentences, in corpus order.
    pub fn pool(&self) -> &[Sentence] {
        &self.pool
    }

    /// Total number of sentences.
    pub fn len(&self) -> usize {
        self.anchors.len() + self.pool.len()
    }

    /// Returns true when the corpus holds no sentences.
    ///
    /// Construction rejects empty corpora, so this is false for any corpus
    /// obtained through [`Corpus::new`].
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a sentence by id.
    pub fn get(&self, id: &str) -> Option<&Sentence> {
        self.by_id.get(id).map(|slot| match *slot {
            Slot::Anchor(i) => &self.anchors[i],
            Slot::Pool(i) => &self.pool[i],
        })
    }

    /// Returns true if the corpus contains a sentence with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Iterates all sentences, anchors first.
    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.anchors.iter().chain(self.pool.iter())
    }
}
