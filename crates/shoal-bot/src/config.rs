//! Application configuration.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use shoal_strategy::StrategyConfig;
use std::path::Path;

/// How evaluation results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `(symbol, [orders])` line per instrument.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Top-level configuration for the harness.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Engine bindings and thresholds.
    #[serde(default)]
    pub strategy: StrategyConfig,

    /// Snapshot JSON to evaluate. Absent = built-in demo snapshot.
    #[serde(default)]
    pub snapshot_path: Option<String>,

    #[serde(default)]
    pub output: OutputFormat,

    /// Fail the whole run if any instrument fails.
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `SHOAL_CONFIG` or `config/default.toml`.
    ///
    /// Falls back to defaults when the file does not exist.
    pub fn load() -> AppResult<Self> {
        let config_path =
            std::env::var("SHOAL_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

        if Path::new(&config_path).exists() {
            Self::from_file(&config_path)
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.strategy.validate().map_err(AppError::Config)
    }
}
