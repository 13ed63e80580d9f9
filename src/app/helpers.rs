//! Async helper functions for startup

use anyhow::Context;
use serde::Deserialize;

use crate::features::Settings;

/// Queue entry as stored in the user's queue file
#[derive(Debug, Clone, Deserialize)]
struct QueueEntry {
    primary: String,
    secondary: String,
}

/// Load review entries from `queue.json` next to the settings file.
///
/// A missing file is the normal case and the caller falls back to the
/// built-in demo entries.
pub async fn load_queue() -> anyhow::Result<Vec<(String, String)>> {
    let path = Settings::file_path()
        .context("could not determine config directory")?
        .with_file_name("queue.json");

    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    let entries: Vec<QueueEntry> =
        serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))?;

    tracing::info!("Loaded queue entries from {}", path.display());
    Ok(entries
        .into_iter()
        .map(|entry| (entry.primary, entry.secondary))
        .collect())
}
