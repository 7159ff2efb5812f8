//! Result of one engine evaluation.

use chrono::{DateTime, Utc};
use shoal_core::{Order, Symbol};
use std::collections::BTreeMap;

use crate::error::StrategyError;

/// Per-instrument outcome of evaluating one snapshot.
///
/// An instrument appears in at most one of `orders`, `failures` and
/// `skipped`. Instruments in `orders` may map to an empty list: they were
/// evaluated but nothing crossed fair value.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Snapshot tick this evaluation was computed for.
    pub timestamp: i64,
    /// Orders proposed per evaluated instrument.
    pub orders: BTreeMap<Symbol, Vec<Order>>,
    /// Instruments whose evaluation failed.
    pub failures: BTreeMap<Symbol, StrategyError>,
    /// Instruments omitted for lack of trade history.
    pub skipped: Vec<Symbol>,
    pub evaluated_at: DateTime<Utc>,
}

impl Evaluation {
    pub(crate) fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            orders: BTreeMap::new(),
            failures: BTreeMap::new(),
            skipped: Vec::new(),
            evaluated_at: Utc::now(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn order_count(&self) -> usize {
        self.orders.values().map(Vec::len).sum()
    }

    pub fn orders_for(&self, symbol: &Symbol) -> Option<&[Order]> {
        self.orders.get(symbol).map(Vec::as_slice)
    }

    /// Drop the diagnostics and keep the instrument → orders mapping.
    pub fn into_orders(self) -> BTreeMap<Symbol, Vec<Order>> {
        self.orders
    }
}
