//! Fair-value estimation.
//!
//! A predictor maps the recent trade history of one instrument to a single
//! price. Instruments may be bound to different predictors without the
//! order generator knowing which one produced the estimate.

use rust_decimal::Decimal;
use shoal_core::{Price, Trade};
use std::fmt::Debug;

use crate::error::{StrategyError, StrategyResult};

/// Capability: `estimate(history) -> price`.
///
/// Implementations must be pure: identical history, identical estimate.
pub trait FairValuePredictor: Debug + Send + Sync {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Estimate fair value from `history`, oldest first.
    fn estimate(&self, history: &[Trade]) -> StrategyResult<Price>;
}

/// Volume-weighted average price: `Σ(price·qty) / Σ(qty)`.
///
/// Quantities enter both sums with their sign, so sell-heavy history pulls
/// the estimate away from the plain mean of prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vwap;

impl FairValuePredictor for Vwap {
    fn name(&self) -> &'static str {
        "vwap"
    }

    fn estimate(&self, history: &[Trade]) -> StrategyResult<Price> {
        let mut notional = Decimal::ZERO;
        let mut volume = Decimal::ZERO;

        for trade in history {
            let leg = trade
                .price
                .inner()
                .checked_mul(trade.quantity.inner())
                .ok_or(StrategyError::Overflow("vwap notional"))?;
            notional = notional
                .checked_add(leg)
                .ok_or(StrategyError::Overflow("vwap notional"))?;
            volume = volume
                .checked_add(trade.quantity.inner())
                .ok_or(StrategyError::Overflow("vwap volume"))?;
        }

        if volume.is_zero() {
            return Err(StrategyError::DegenerateEstimate);
        }

        notional
            .checked_div(volume)
            .map(Price::new)
            .ok_or(StrategyError::Overflow("vwap"))
    }
}
