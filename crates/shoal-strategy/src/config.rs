//! Strategy configuration.
//!
//! Binds every instrument to a predictor and a sizing policy. Loaded from
//! TOML by the harness and resolved into a [`StrategyRegistry`] when the
//! engine is built.
//!
//! [`StrategyRegistry`]: crate::registry::StrategyRegistry

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use shoal_core::Symbol;
use std::collections::BTreeMap;

use crate::sizing::LinearConfidence;

/// Fair-value predictor selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PredictorKind {
    /// Volume-weighted average price of recent market trades.
    #[default]
    Vwap,
}

/// Sizing policy selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SizingKind {
    /// Fraction of the level proportional to distance from fair value.
    #[default]
    LinearConfidence,
    /// Entire resting quantity.
    FullSize,
}

/// Strategy pair for one instrument.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstrumentBinding {
    #[serde(default)]
    pub predictor: PredictorKind,
    #[serde(default)]
    pub sizing: SizingKind,
}

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyConfig {
    /// Per-instrument bindings. Every instrument the engine will see must
    /// appear here.
    #[serde(default = "default_instruments")]
    pub instruments: BTreeMap<Symbol, InstrumentBinding>,

    /// Minimum number of market trades before an instrument is evaluated.
    #[serde(default = "default_min_history")]
    pub min_history: usize,

    /// Cap on the fraction of a level traded by linear-confidence sizing.
    #[serde(default = "default_max_fraction")]
    pub max_fraction: Decimal,
}

fn default_instruments() -> BTreeMap<Symbol, InstrumentBinding> {
    ["PEARLS", "BANANAS"]
        .into_iter()
        .map(|s| (Symbol::from(s), InstrumentBinding::default()))
        .collect()
}

fn default_min_history() -> usize {
    2
}

fn default_max_fraction() -> Decimal {
    LinearConfidence::DEFAULT_MAX_FRACTION
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            instruments: default_instruments(),
            min_history: default_min_history(),
            max_fraction: default_max_fraction(),
        }
    }
}

impl StrategyConfig {
    /// Validate configuration values.
    ///
    /// Returns Err if values are invalid:
    /// - no instruments bound
    /// - min_history < 1
    /// - max_fraction outside (0, 1]
    pub fn validate(&self) -> Result<(), String> {
        if self.instruments.is_empty() {
            return Err("at least one instrument must be configured".to_string());
        }

        if self.min_history < 1 {
            return Err(format!(
                "min_history ({}) must be at least 1",
                self.min_history
            ));
        }

        if self.max_fraction <= Decimal::ZERO || self.max_fraction > dec!(1) {
            return Err(format!(
                "max_fraction ({}) must be in (0, 1]",
                self.max_fraction
            ));
        }

        Ok(())
    }

    /// Bind `symbol`, replacing any existing binding.
    pub fn with_instrument(
        mut self,
        symbol: impl Into<Symbol>,
        predictor: PredictorKind,
        sizing: SizingKind,
    ) -> Self {
        self.instruments
            .insert(symbol.into(), InstrumentBinding { predictor, sizing });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StrategyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_history, 2);
        assert_eq!(config.max_fraction, dec!(0.5));
        assert_eq!(config.instruments.len(), 2);
        assert_eq!(
            config.instruments.get("PEARLS"),
            Some(&InstrumentBinding {
                predictor: PredictorKind::Vwap,
                sizing: SizingKind::LinearConfidence,
            })
        );
    }

    #[test]
    fn test_parse_from_toml() {
        let raw = r#"
            min_history = 3
            max_fraction = 0.25

            [instruments.PEARLS]
            predictor = "vwap"
            sizing = "full_size"

            [instruments.BANANAS]
            sizing = "linear_confidence"
        "#;

        let config: StrategyConfig = toml::from_str(raw).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_history, 3);
        assert_eq!(config.max_fraction, dec!(0.25));
        assert_eq!(config.instruments["PEARLS"].sizing, SizingKind::FullSize);
        assert_eq!(config.instruments["BANANAS"].predictor, PredictorKind::Vwap);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let raw = r#"
            [instruments.PEARLS]
            sizing = "kelly"
        "#;
        assert!(toml::from_str::<StrategyConfig>(raw).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_instruments() {
        let config = StrategyConfig {
            instruments: BTreeMap::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_history() {
        let config = StrategyConfig {
            min_history: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("min_history"));
    }

    #[test]
    fn test_validate_rejects_bad_fraction() {
        for bad in [dec!(0), dec!(-0.1), dec!(1.5)] {
            let config = StrategyConfig {
                max_fraction: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_with_instrument_overrides() {
        let config = StrategyConfig::default().with_instrument(
            "PEARLS",
            PredictorKind::Vwap,
            SizingKind::FullSize,
        );
        assert_eq!(config.instruments["PEARLS"].sizing, SizingKind::FullSize);
        assert_eq!(config.instruments.len(), 2);
    }
}
