//! The decision engine.
//!
//! Strategy: for every instrument with a book in the snapshot
//! - skip (omit from output) when market history has fewer than
//!   `min_history` trades
//! - estimate fair value with the instrument's predictor
//! - cross the book against it with the instrument's sizing policy
//!
//! Instruments are independent. A failure in one is recorded in the
//! evaluation and does not stop the others.

use shoal_core::{Order, OrderDepth, Symbol, TradingState};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::config::StrategyConfig;
use crate::error::{StrategyError, StrategyResult};
use crate::evaluation::Evaluation;
use crate::generator::generate_orders;
use crate::registry::StrategyRegistry;

/// Outcome of evaluating a single instrument.
enum InstrumentOutcome {
    Orders(Vec<Order>),
    Skipped { trades: usize },
}

/// Stateless evaluator over trading snapshots.
#[derive(Debug)]
pub struct Trader {
    registry: StrategyRegistry,
    min_history: usize,
}

impl Trader {
    /// Build the engine from configuration.
    ///
    /// Fails with a configuration error if the config is invalid; nothing
    /// is evaluated with a half-resolved registry.
    pub fn new(config: StrategyConfig) -> StrategyResult<Self> {
        let registry = StrategyRegistry::from_config(&config)?;
        info!(
            instruments = registry.len(),
            min_history = config.min_history,
            "Strategy registry resolved"
        );
        Ok(Self {
            registry,
            min_history: config.min_history,
        })
    }

    /// Build the engine around an already-populated registry.
    pub fn with_registry(registry: StrategyRegistry, min_history: usize) -> StrategyResult<Self> {
        if registry.is_empty() {
            return Err(StrategyError::InvalidConfig(
                "registry has no instruments".to_string(),
            ));
        }
        if min_history < 1 {
            return Err(StrategyError::InvalidConfig(format!(
                "min_history ({min_history}) must be at least 1"
            )));
        }
        Ok(Self {
            registry,
            min_history,
        })
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn min_history(&self) -> usize {
        self.min_history
    }

    /// Check up front that every symbol the snapshot mentions is bound.
    pub fn validate_snapshot(&self, state: &TradingState) -> StrategyResult<()> {
        self.registry.ensure_covers(state.symbols())
    }

    /// Evaluate one snapshot, isolating per-instrument failures.
    pub fn evaluate(&self, state: &TradingState) -> Evaluation {
        let mut evaluation = Evaluation::new(state.timestamp);

        for (symbol, depth) in &state.order_depths {
            match self.evaluate_instrument(symbol, depth, state) {
                Ok(InstrumentOutcome::Orders(orders)) => {
                    info!(%symbol, orders = orders.len(), "Instrument evaluated");
                    evaluation.orders.insert(symbol.clone(), orders);
                }
                Ok(InstrumentOutcome::Skipped { trades }) => {
                    debug!(
                        %symbol,
                        trades,
                        min_history = self.min_history,
                        "Insufficient market history, skipping"
                    );
                    evaluation.skipped.push(symbol.clone());
                }
                Err(e) => {
                    warn!(%symbol, error = %e, "Instrument evaluation failed");
                    evaluation.failures.insert(symbol.clone(), e);
                }
            }
        }

        evaluation
    }

    /// Evaluate one snapshot, failing on the first instrument error.
    pub fn run(&self, state: &TradingState) -> StrategyResult<BTreeMap<Symbol, Vec<Order>>> {
        let evaluation = self.evaluate(state);
        if let Some((_, e)) = evaluation.failures.into_iter().next() {
            return Err(e);
        }
        Ok(evaluation.orders)
    }

    fn evaluate_instrument(
        &self,
        symbol: &Symbol,
        depth: &OrderDepth,
        state: &TradingState,
    ) -> StrategyResult<InstrumentOutcome> {
        // Unbound symbols surface even when they would have been skipped
        let strategy = self.registry.get(symbol)?;

        let history = state.market_history(symbol).unwrap_or_default();
        if history.len() < self.min_history {
            return Ok(InstrumentOutcome::Skipped {
                trades: history.len(),
            });
        }

        let estimate = strategy.predictor.estimate(history)?;

        debug!(
            %symbol,
            predictor = strategy.predictor.name(),
            sizing = strategy.sizing.name(),
            estimate = %estimate,
            trades = history.len(),
            best_ask = ?depth.best_ask().map(|(p, _)| p.inner()),
            best_bid = ?depth.best_bid().map(|(p, _)| p.inner()),
            "Fair value estimated"
        );

        let orders = generate_orders(symbol, estimate, depth, strategy.sizing.as_ref())?;
        Ok(InstrumentOutcome::Orders(orders))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PredictorKind, SizingKind};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use shoal_core::{Price, Quantity, Size, Trade};

    fn px(d: Decimal) -> Price {
        Price::new(d)
    }

    fn trade(symbol: &str, price: Decimal, qty: Decimal) -> Trade {
        Trade::new(Symbol::from(symbol), px(price), Quantity::new(qty), 900)
    }

    fn full_size_trader(symbol: &str) -> Trader {
        let config = StrategyConfig::default().with_instrument(
            symbol,
            PredictorKind::Vwap,
            SizingKind::FullSize,
        );
        Trader::new(config).unwrap()
    }

    fn book() -> OrderDepth {
        OrderDepth::new()
            .with_ask(px(dec!(11)), Size::new(dec!(4)))
            .with_ask(px(dec!(12)), Size::new(dec!(8)))
            .with_bid(px(dec!(10)), Size::new(dec!(7)))
            .with_bid(px(dec!(9)), Size::new(dec!(5)))
    }

    fn state_with(symbol: &str, trades: Vec<Trade>) -> TradingState {
        let mut state = TradingState::new(1000);
        state.order_depths.insert(Symbol::from(symbol), book());
        state.market_trades.insert(Symbol::from(symbol), trades);
        state
    }

    #[test]
    fn test_short_history_is_omitted() {
        let trader = full_size_trader("A");
        let state = state_with("A", vec![trade("A", dec!(11), dec!(4))]);

        let evaluation = trader.evaluate(&state);
        assert!(evaluation.orders.is_empty());
        assert!(evaluation.failures.is_empty());
        assert_eq!(evaluation.skipped, vec![Symbol::from("A")]);
    }

    #[test]
    fn test_missing_history_is_omitted() {
        let trader = full_size_trader("A");
        let mut state = TradingState::new(1000);
        state.order_depths.insert(Symbol::from("A"), book());

        let evaluation = trader.evaluate(&state);
        assert!(evaluation.orders_for(&Symbol::from("A")).is_none());
        assert_eq!(evaluation.skipped.len(), 1);
    }

    #[test]
    fn test_evaluated_instrument_without_crossing_is_present_and_empty() {
        let trader = full_size_trader("A");
        let state = state_with(
            "A",
            vec![trade("A", dec!(11), dec!(4)), trade("A", dec!(11), dec!(4))],
        );

        let evaluation = trader.evaluate(&state);
        assert_eq!(
            evaluation.orders_for(&Symbol::from("A")).map(|o| o.is_empty()),
            Some(true)
        );
        assert_eq!(evaluation.order_count(), 0);
    }

    #[test]
    fn test_unknown_instrument_reported_not_panicked() {
        let trader = full_size_trader("A");
        let mut state = state_with(
            "A",
            vec![trade("A", dec!(11), dec!(4)), trade("A", dec!(12), dec!(4))],
        );
        state.order_depths.insert(Symbol::from("Z"), book());
        state.market_trades.insert(
            Symbol::from("Z"),
            vec![trade("Z", dec!(1), dec!(1)), trade("Z", dec!(1), dec!(1))],
        );

        let evaluation = trader.evaluate(&state);
        assert_eq!(
            evaluation.failures.get("Z"),
            Some(&StrategyError::UnknownInstrument(Symbol::from("Z")))
        );
        // A still evaluated: VWAP 11.5 crosses the 11 ask
        assert_eq!(evaluation.orders_for(&Symbol::from("A")).map(|o| o.len()), Some(1));
        assert!(trader.validate_snapshot(&state).is_err());
    }

    #[test]
    fn test_run_is_strict() {
        let trader = full_size_trader("A");
        let state = state_with(
            "A",
            vec![trade("A", dec!(11), dec!(4)), trade("A", dec!(12), dec!(-4))],
        );

        assert_eq!(trader.run(&state), Err(StrategyError::DegenerateEstimate));
    }

    #[test]
    fn test_sizing_overflow_is_isolated() {
        let config = StrategyConfig::default()
            .with_instrument("A", PredictorKind::Vwap, SizingKind::LinearConfidence)
            .with_instrument("B", PredictorKind::Vwap, SizingKind::FullSize);
        let trader = Trader::new(config).unwrap();

        // VWAP is representable but its distance to the bid is not
        let far = -(Decimal::MAX / dec!(3));
        let mut state = state_with(
            "B",
            vec![trade("B", dec!(20), dec!(1)), trade("B", dec!(20), dec!(1))],
        );
        let bid = px(Decimal::MAX - Decimal::MAX / dec!(10));
        state
            .order_depths
            .insert(Symbol::from("A"), OrderDepth::new().with_bid(bid, Size::new(dec!(1))));
        state.market_trades.insert(
            Symbol::from("A"),
            vec![trade("A", far, dec!(1)), trade("A", far, dec!(1))],
        );

        let evaluation = trader.evaluate(&state);
        assert_eq!(
            evaluation.failures.get("A"),
            Some(&StrategyError::Overflow("sizing distance"))
        );
        // B still evaluated: VWAP 20 crosses both asks
        assert_eq!(
            evaluation.orders_for(&Symbol::from("B")).map(|o| o.len()),
            Some(2)
        );
    }

    #[test]
    fn test_with_registry_rejects_empty() {
        let err = Trader::with_registry(StrategyRegistry::new(), 2).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_min_history_is_configurable() {
        let config = StrategyConfig {
            min_history: 1,
            ..Default::default()
        }
        .with_instrument("A", PredictorKind::Vwap, SizingKind::FullSize);
        let trader = Trader::new(config).unwrap();
        let state = state_with("A", vec![trade("A", dec!(20), dec!(1))]);

        let orders = trader.run(&state).unwrap();
        // VWAP 20 crosses both asks
        assert_eq!(orders[&Symbol::from("A")].len(), 2);
    }
}
