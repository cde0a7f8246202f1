//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{StresscamError, StresscamResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default scoring parameters.
    pub scoring: ScoringDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default stress-scoring parameters.
///
/// These mirror the knobs of `ScoringConfig` in the scoring crate; the CLI
/// uses them as the baseline that command-line flags override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringDefaults {
    /// Rolling history capacity (number of past instantaneous scores).
    pub history_capacity: usize,

    /// Weight applied to the "angry" probability.
    pub angry_weight: f64,

    /// Weight applied to the "fear" probability.
    pub fear_weight: f64,

    /// Weight applied to the "sad" probability.
    pub sad_weight: f64,

    /// Smoothed scores above this are High stress.
    pub high_threshold: u8,

    /// Smoothed scores above this (and at or below the high threshold)
    /// are Moderate stress.
    pub moderate_threshold: u8,

    /// Whether faceless frames append a zero to the history
    /// (`true`) or leave it untouched (`false`).
    pub append_zero_on_no_face: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "stresscam=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for ScoringDefaults {
    fn default() -> Self {
        Self {
            history_capacity: 50,
            angry_weight: 0.4,
            fear_weight: 0.35,
            sad_weight: 0.25,
            high_threshold: 70,
            moderate_threshold: 40,
            append_zero_on_no_face: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> StresscamResult<()> {
        let path = config_file_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl ScoringDefaults {
    /// Check the parameters make sense before a scorer is built from them.
    ///
    /// Catches hand-edited config files with nonsense values; the scorer
    /// itself trusts its inputs.
    pub fn validate(&self) -> StresscamResult<()> {
        for (name, weight) in [
            ("angry_weight", self.angry_weight),
            ("fear_weight", self.fear_weight),
            ("sad_weight", self.sad_weight),
        ] {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(StresscamError::config(format!(
                    "{name} must be in [0, 1], got {weight}"
                )));
            }
        }
        if self.moderate_threshold >= self.high_threshold {
            return Err(StresscamError::config(format!(
                "moderate_threshold ({}) must be below high_threshold ({})",
                self.moderate_threshold, self.high_threshold
            )));
        }
        if self.history_capacity == 0 {
            return Err(StresscamError::config("history_capacity must be at least 1"));
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("stresscam").join("config.json")
}
