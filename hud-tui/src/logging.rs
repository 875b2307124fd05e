//! Tracing setup.
//!
//! The terminal belongs to the UI, so log lines go to a file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{HudError, Result};

pub const LOG_ENV: &str = "HUD_TUI_LOG";

pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("hud-tui")
        .join("hud-tui.log")
}

pub fn init_tracing(log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .compact()
        .try_init()
        .map_err(|e| HudError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn test_default_log_path_is_named() {
        let path = default_log_path();
        assert!(path.ends_with("hud-tui/hud-tui.log"));
    }

    // The only test that installs the global subscriber
    #[test]
    fn test_init_tracing_writes_to_file() {
        let dir = tempdir().unwrap();
        let log_file = dir.path().join("nested").join("hud-tui.log");

        init_tracing(&log_file).unwrap();
        tracing::warn!(marker = 42, "log file smoke line");

        let contents = fs::read_to_string(&log_file).unwrap();
        assert!(contents.contains("log file smoke line"));
        assert!(contents.contains("WARN"));

        let err = init_tracing(&log_file).unwrap_err();
        assert!(matches!(err, HudError::Logging(_)));
    }
}
