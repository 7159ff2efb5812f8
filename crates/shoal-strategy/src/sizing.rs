//! Trade sizing policies.
//!
//! Given the fair value, the level being crossed and the resting volume at
//! that level, decide how much to trade there. Policies are interchangeable;
//! the order generator only sees the trait.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shoal_core::{Price, Size};
use std::fmt::Debug;

use crate::error::{StrategyError, StrategyResult};

pub trait SizingPolicy: Debug + Send + Sync {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Volume to trade at `level`. `max_volume` is always a magnitude.
    fn size(&self, estimate: Price, level: Price, max_volume: Size) -> StrategyResult<Size>;
}

/// Trade a fraction of the level proportional to its relative distance from
/// fair value: `min(max_fraction, |estimate - level| / |estimate|) * max_volume`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearConfidence {
    max_fraction: Decimal,
}

impl LinearConfidence {
    /// Default cap on the traded fraction of a level.
    pub const DEFAULT_MAX_FRACTION: Decimal = dec!(0.5);

    pub fn new(max_fraction: Decimal) -> Self {
        Self { max_fraction }
    }

    pub fn max_fraction(&self) -> Decimal {
        self.max_fraction
    }
}

impl Default for LinearConfidence {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FRACTION)
    }
}

impl SizingPolicy for LinearConfidence {
    fn name(&self) -> &'static str {
        "linear_confidence"
    }

    fn size(&self, estimate: Price, level: Price, max_volume: Size) -> StrategyResult<Size> {
        if estimate.is_zero() {
            return Err(StrategyError::ZeroEstimate);
        }

        let confidence = estimate
            .distance(level)
            .ok_or(StrategyError::Overflow("sizing distance"))?
            .checked_div(estimate.inner().abs())
            .ok_or(StrategyError::Overflow("sizing confidence"))?;
        let fraction = confidence.min(self.max_fraction);

        max_volume
            .inner()
            .checked_mul(fraction)
            .map(Size::new)
            .ok_or(StrategyError::Overflow("sizing volume"))
    }
}

/// Take everything resting at a qualifying level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullSize;

impl SizingPolicy for FullSize {
    fn name(&self) -> &'static str {
        "full_size"
    }

    fn size(&self, _estimate: Price, _level: Price, max_volume: Size) -> StrategyResult<Size> {
        Ok(max_volume)
    }
}
