//! File-based structured logging.
//!
//! The game owns the terminal, so log output never goes to stdout or stderr. When a
//! log file is configured, a `tracing-subscriber` fmt layer appends to it; otherwise
//! no subscriber is installed and events are discarded.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns whether logging was enabled.
pub fn init(log_file: Option<&Path>, filter: &str) -> Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter {filter:?}"))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_path() {
        assert!(!init(None, "info").unwrap());
    }

    #[test]
    fn writes_events_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.log");
        assert!(init(Some(&path), "info").unwrap());

        tracing::info!(score = 12, "logging smoke test");
        tracing::debug!("filtered out");

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("logging smoke test"));
        assert!(text.contains("score=12"));
        assert!(!text.contains("filtered out"));
    }
}
