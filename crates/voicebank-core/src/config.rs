//! Configuration structures.
//!
//! Plain serde structs; loading from disk lives in the infrastructure
//! crate. Every field has a default so an absent or partial config file
//! yields a working setup.

use crate::corpus::Sentence;
use crate::session::DEFAULT_SESSION_SIZE;
use serde::{Deserialize, Serialize};

/// Root configuration for the engine.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct VoicebankConfig {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Corpus source configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CorpusConfig {
    /// Path to the corpus JSON file, relative to the data directory when
    /// not absolute.
    #[serde(default = "default_corpus_path")]
    pub path: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
        }
    }
}

fn default_corpus_path() -> String {
    "corpus.json".to_string()
}

/// Session construction configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Target number of sentences per batch.
    #[serde(default = "default_target_size")]
    pub target_size: usize,
    /// Minimum acceptable recording duration per word, in seconds.
    #[serde(default = "default_min_seconds_per_word")]
    pub min_seconds_per_word: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            target_size: default_target_size(),
            min_seconds_per_word: default_min_seconds_per_word(),
        }
    }
}

fn default_target_size() -> usize {
    DEFAULT_SESSION_SIZE
}

fn default_min_seconds_per_word() -> f32 {
    0.4
}

impl SessionConfig {
    /// Minimum acceptable recording duration for a sentence, in seconds.
    ///
    /// A recording shorter than this is rejected by the submission flow as
    /// too fast to be a genuine read.
    pub fn min_recording_secs(&self, sentence: &Sentence) -> f32 {
        sentence.word_count as f32 * self.min_seconds_per_word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::SentenceCategory;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config: VoicebankConfig = toml::from_str("").unwrap();

        assert_eq!(config.corpus.path, "corpus.json");
        assert_eq!(config.session.target_size, DEFAULT_SESSION_SIZE);
        assert!((config.session.min_seconds_per_word - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: VoicebankConfig = toml::from_str(
            r#"
            [session]
            target_size = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.session.target_size, 10);
        assert_eq!(config.corpus.path, "corpus.json");
    }

    #[test]
    fn test_min_recording_secs_scales_with_word_count() {
        let config = SessionConfig::default();
        let sentence = Sentence {
            id: "s1".to_string(),
            text: "five words are in here".to_string(),
            category: SentenceCategory::Everyday,
            word_count: 5,
            emotion: None,
            context: None,
        };

        assert!((config.min_recording_secs(&sentence) - 2.0).abs() < f32::EPSILON);
    }
}
