//! Instrument → strategy registry.
//!
//! Resolved once from [`StrategyConfig`] when the engine is constructed and
//! owned by it afterwards. Lookups never fall back to a default: a symbol
//! with no binding is a configuration error.

use shoal_core::Symbol;
use std::collections::BTreeMap;

use crate::config::{InstrumentBinding, PredictorKind, SizingKind, StrategyConfig};
use crate::error::{StrategyError, StrategyResult};
use crate::predictor::{FairValuePredictor, Vwap};
use crate::sizing::{FullSize, LinearConfidence, SizingPolicy};

/// Predictor and sizing policy bound to one instrument.
#[derive(Debug)]
pub struct InstrumentStrategy {
    pub predictor: Box<dyn FairValuePredictor>,
    pub sizing: Box<dyn SizingPolicy>,
}

impl InstrumentStrategy {
    pub fn new(predictor: Box<dyn FairValuePredictor>, sizing: Box<dyn SizingPolicy>) -> Self {
        Self { predictor, sizing }
    }

    fn from_binding(binding: &InstrumentBinding, config: &StrategyConfig) -> Self {
        let predictor: Box<dyn FairValuePredictor> = match binding.predictor {
            PredictorKind::Vwap => Box::new(Vwap),
        };
        let sizing: Box<dyn SizingPolicy> = match binding.sizing {
            SizingKind::LinearConfidence => Box::new(LinearConfidence::new(config.max_fraction)),
            SizingKind::FullSize => Box::new(FullSize),
        };
        Self { predictor, sizing }
    }
}

#[derive(Debug, Default)]
pub struct StrategyRegistry {
    strategies: BTreeMap<Symbol, InstrumentStrategy>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every binding in `config`.
    pub fn from_config(config: &StrategyConfig) -> StrategyResult<Self> {
        config.validate().map_err(StrategyError::InvalidConfig)?;

        let strategies = config
            .instruments
            .iter()
            .map(|(symbol, binding)| {
                (
                    symbol.clone(),
                    InstrumentStrategy::from_binding(binding, config),
                )
            })
            .collect();

        Ok(Self { strategies })
    }

    /// Register a custom strategy pair, replacing any existing one.
    pub fn register(&mut self, symbol: impl Into<Symbol>, strategy: InstrumentStrategy) {
        self.strategies.insert(symbol.into(), strategy);
    }

    pub fn get(&self, symbol: &Symbol) -> StrategyResult<&InstrumentStrategy> {
        self.strategies
            .get(symbol)
            .ok_or_else(|| StrategyError::UnknownInstrument(symbol.clone()))
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.strategies.contains_key(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.strategies.keys()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Fail with `InvalidConfig` naming every symbol that has no binding.
    pub fn ensure_covers<'a>(
        &self,
        symbols: impl IntoIterator<Item = &'a Symbol>,
    ) -> StrategyResult<()> {
        let mut missing: Vec<&str> = symbols
            .into_iter()
            .filter(|s| !self.contains(s))
            .map(Symbol::as_str)
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        missing.sort_unstable();
        missing.dedup();
        Err(StrategyError::InvalidConfig(format!(
            "no strategy registered for: {}",
            missing.join(", ")
        )))
    }
}
