//! HUD configuration file.
//!
//! The file is plain JSON; every field is optional and falls back to the
//! built-in dashboard content.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{HudError, Result};

pub const CONFIG_ENV: &str = "HUD_TUI_CONFIG";
const CONFIG_DIR_NAME: &str = "hud-tui";
const CONFIG_FILE_NAME: &str = "config.json";
const LOCAL_CONFIG_FILE: &str = "hud.json";

const MAX_SPARK_POINTS: usize = 4096;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub spark_seed: i32,
    pub spark_points: usize,
    pub frame_ms: u64,
    pub reply_delay_ms: u64,
    pub assistant_name: String,
    pub greeting: String,
    pub news: Vec<String>,
    pub stocks: Vec<Quote>,
    pub stats: Vec<Stat>,
    pub battery_history: Vec<f64>,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            spark_seed: 13,
            spark_points: 18,
            frame_ms: 33,
            reply_delay_ms: 900,
            assistant_name: "MJ Assistant".to_string(),
            greeting: "Hello! I'm MJ, your AI assistant. How can I help you today?".to_string(),
            news: vec![
                "AI assistant launched at scale".to_string(),
                "Crypto market stabilizing".to_string(),
            ],
            stocks: [
                ("AAPL", "+1.25%"),
                ("GOOGL", "+0.87%"),
                ("TSLA", "-0.43%"),
                ("AMZN", "+2.14%"),
            ]
            .into_iter()
            .map(|(symbol, change)| Quote {
                symbol: symbol.to_string(),
                change: change.to_string(),
            })
            .collect(),
            stats: [("Stocks", "+1.83%"), ("Crypto", "-0.45%"), ("Weather", "29°C")]
                .into_iter()
                .map(|(label, value)| Stat {
                    label: label.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            battery_history: vec![0.88, 0.86, 0.89, 0.84, 0.87, 0.83, 0.85, 0.82, 0.84, 0.81],
        }
    }
}

impl HudConfig {
    pub fn validate(&self) -> Result<()> {
        if self.frame_ms == 0 {
            return Err(HudError::InvalidConfig(
                "frame_ms must be greater than zero".to_string(),
            ));
        }
        if self.spark_points > MAX_SPARK_POINTS {
            return Err(HudError::InvalidConfig(format!(
                "spark_points must be at most {}, got {}",
                MAX_SPARK_POINTS, self.spark_points
            )));
        }
        if let Some(level) = self
            .battery_history
            .iter()
            .find(|level| !(0.0..=1.0).contains(*level))
        {
            return Err(HudError::InvalidConfig(format!(
                "battery_history entries must be within 0.0..=1.0, got {}",
                level
            )));
        }
        Ok(())
    }

    /// Latest battery sample as a whole percentage
    pub fn system_load_percent(&self) -> u8 {
        let level = self.battery_history.last().copied().unwrap_or(0.0);
        (level * 100.0).round() as u8
    }
}

/// Values set on the command line. They win over the file, including
/// after a hot reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub spark_seed: Option<i32>,
    pub spark_points: Option<usize>,
    pub frame_ms: Option<u64>,
}

impl Overrides {
    pub fn apply(&self, mut hud: HudConfig) -> HudConfig {
        if let Some(seed) = self.spark_seed {
            hud.spark_seed = seed;
        }
        if let Some(points) = self.spark_points {
            hud.spark_points = points;
        }
        if let Some(frame_ms) = self.frame_ms {
            hud.frame_ms = frame_ms;
        }
        hud
    }
}

pub fn parse_config(contents: &str, path: &Path) -> Result<HudConfig> {
    let config: HudConfig =
        serde_json::from_str(contents).map_err(|source| HudError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

pub fn load_from(path: &Path) -> Result<HudConfig> {
    let contents = fs::read_to_string(path).map_err(|source| HudError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents, path)
}

/// Load the first configuration file found.
///
/// An explicit path must exist; the default locations are optional.
pub fn load_settings(explicit: Option<&Path>) -> Result<(HudConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = load_from(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }
    for candidate in default_config_paths() {
        if candidate.exists() {
            let config = load_from(&candidate)?;
            tracing::info!(path = %candidate.display(), "loaded configuration");
            return Ok((config, Some(candidate)));
        }
    }
    tracing::info!("no configuration file found, using defaults");
    Ok((HudConfig::default(), None))
}

pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(explicit) = env::var_os(CONFIG_ENV) {
        paths.push(PathBuf::from(explicit));
    }
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from(LOCAL_CONFIG_FILE));

    paths
}
