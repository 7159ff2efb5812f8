//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Strategy error: {0}")]
    Strategy(#[from] shoal_strategy::StrategyError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] shoal_core::CoreError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] shoal_telemetry::TelemetryError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
