//! Unified path management for voicebank files.
//!
//! All configuration and contributor data live under the platform's
//! standard directories, resolved through the `dirs` crate so behavior is
//! consistent across Linux, macOS, and Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for voicebank.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/voicebank/         # Config directory
/// └── config.toml              # Engine configuration
///
/// ~/.local/share/voicebank/    # Data directory
/// ├── corpus.json              # Sentence corpus (default location)
/// └── journal.json             # Recording journal
/// ```
pub struct VoicebankPaths;

impl VoicebankPaths {
    /// Returns the voicebank configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|d| d.join("voicebank"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the voicebank data directory.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|d| d.join("voicebank"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path of the configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default path of the corpus file.
    ///
    /// The configured `corpus.path` takes precedence when absolute;
    /// relative values are resolved against the data directory.
    pub fn corpus_file(configured: &str) -> Result<PathBuf, PathError> {
        let configured = PathBuf::from(configured);
        if configured.is_absolute() {
            Ok(configured)
        } else {
            Ok(Self::data_dir()?.join(configured))
        }
    }

    /// Returns the path of the recording journal.
    pub fn journal_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("journal.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_corpus_path_wins() {
        let absolute = if cfg!(windows) {
            r"C:\corpora\main.json"
        } else {
            "/srv/corpora/main.json"
        };

        let resolved = VoicebankPaths::corpus_file(absolute).unwrap();
        assert_eq!(resolved, PathBuf::from(absolute));
    }

    #[test]
    fn test_relative_corpus_path_lands_in_data_dir() {
        match VoicebankPaths::corpus_file("corpus.json") {
            Ok(resolved) => assert!(resolved.ends_with("voicebank/corpus.json")),
            // no home directory in this environment
            Err(PathError::HomeDirNotFound) => {}
        }
    }
}
