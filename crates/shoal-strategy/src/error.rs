//! Strategy error types.

use shoal_core::Symbol;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// Total signed volume of the history is zero, so no VWAP exists.
    #[error("Degenerate estimate: total signed volume is zero (division by zero)")]
    DegenerateEstimate,

    /// Linear-confidence sizing needs a non-zero fair value to scale by.
    #[error("Cannot size against a zero fair value")]
    ZeroEstimate,

    #[error("Decimal overflow while computing {0}")]
    Overflow(&'static str),

    /// Symbol has no predictor/sizing binding.
    #[error("Configuration error: no strategy registered for {0}")]
    UnknownInstrument(Symbol),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

impl StrategyError {
    /// True for errors that indicate a broken deployment rather than bad data.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnknownInstrument(_) | Self::InvalidConfig(_))
    }
}

pub type StrategyResult<T> = Result<T, StrategyError>;
