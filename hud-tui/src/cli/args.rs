//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, HudConfig, Overrides};
use crate::error::Result;
use crate::logging;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Animated heads-up display dashboard for the terminal
#[derive(Debug, Parser)]
#[command(name = "hud-tui", version, about)]
pub struct CliArgs {
    /// Configuration file (JSON). Defaults to $HUD_TUI_CONFIG, then the user config dir, then ./hud.json
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for the market sparkline
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i32>,

    /// Number of sparkline samples
    #[arg(short, long, value_name = "N")]
    pub points: Option<usize>,

    /// Frame interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub frame_ms: Option<u64>,

    /// Write logs here instead of the cache directory
    #[arg(long, value_name = "PATH", env = "HUD_TUI_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Do not reload the configuration file when it changes
    #[arg(long)]
    pub no_watch: bool,
}

/// Configuration after merging the file with CLI overrides
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub hud: HudConfig,
    pub config_path: Option<PathBuf>,
    pub overrides: Overrides,
    pub log_file: PathBuf,
    pub watch: bool,
}

impl CliArgs {
    /// Load the configuration file and apply overrides
    pub fn resolve(self) -> Result<CliConfig> {
        let (hud, config_path) = config::load_settings(self.config.as_deref())?;
        let overrides = self.overrides();
        let hud = overrides.apply(hud);
        hud.validate()?;

        Ok(CliConfig {
            hud,
            config_path,
            overrides,
            log_file: self.log_file.clone().unwrap_or_else(logging::default_log_path),
            watch: !self.no_watch,
        })
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            spark_seed: self.seed,
            spark_points: self.points,
            frame_ms: self.frame_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::tempdir;

    #[test]
    fn test_overrides_win_over_file() {
        let args = CliArgs::parse_from(["hud-tui", "--seed", "-9", "--points", "24"]);
        let hud = args.overrides().apply(HudConfig::default());
        assert_eq!(hud.spark_seed, -9);
        assert_eq!(hud.spark_points, 24);
        assert_eq!(hud.frame_ms, HudConfig::default().frame_ms);
    }

    #[test]
    fn test_no_flags_keep_file_values() {
        let args = CliArgs::parse_from(["hud-tui"]);
        assert!(!args.no_watch);
        assert_eq!(args.overrides().apply(HudConfig::default()), HudConfig::default());
    }

    #[test]
    fn test_resolve_with_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hud.json");
        fs::write(&path, r#"{ "spark_seed": 5, "frame_ms": 50 }"#).unwrap();
        let log = dir.path().join("hud.log");

        let args = CliArgs::parse_from([
            "hud-tui",
            "--config",
            path.to_str().unwrap(),
            "--frame-ms",
            "20",
            "--log-file",
            log.to_str().unwrap(),
            "--no-watch",
        ]);
        let resolved = args.resolve().unwrap();
        assert_eq!(resolved.hud.spark_seed, 5);
        assert_eq!(resolved.hud.frame_ms, 20);
        assert_eq!(resolved.overrides.frame_ms, Some(20));
        assert_eq!(resolved.overrides.spark_seed, None);
        assert_eq!(resolved.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(resolved.log_file, log);
        assert!(!resolved.watch);
    }

    #[test]
    fn test_resolve_rejects_zero_frame_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hud.json");
        fs::write(&path, "{}").unwrap();
        let args = CliArgs::parse_from([
            "hud-tui",
            "--config",
            path.to_str().unwrap(),
            "--frame-ms",
            "0",
        ]);
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_version_matches_package() {
        assert!(!VERSION.is_empty());
    }
}
