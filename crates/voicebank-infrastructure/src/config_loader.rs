//! Configuration file loading.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use voicebank_core::config::VoicebankConfig;

/// Loads `config.toml`, falling back to defaults when the file is absent.
///
/// A missing file is the normal first-run state and yields the default
/// configuration; a present-but-malformed file is an error.
pub async fn load_config(path: impl AsRef<Path>) -> Result<VoicebankConfig> {
    let path = path.as_ref();

    match fs::read_to_string(path).await {
        Ok(raw) => toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(VoicebankConfig::default())
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read config file: {}", path.display()))
        }
    }
}
