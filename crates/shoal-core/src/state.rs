//! Trading state snapshot.
//!
//! One complete, instantaneous view of the exchange handed to the engine
//! for a single evaluation. Every map is keyed by `Symbol` and ordered, so
//! iteration (and therefore output order) is deterministic.

use crate::error::Result;
use crate::{Listing, OrderDepth, Symbol, Trade};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingState {
    /// Exchange tick of this snapshot.
    pub timestamp: i64,
    #[serde(default)]
    pub listings: BTreeMap<Symbol, Listing>,
    #[serde(default)]
    pub order_depths: BTreeMap<Symbol, OrderDepth>,
    /// Trades we were party to since the previous snapshot.
    #[serde(default)]
    pub own_trades: BTreeMap<Symbol, Vec<Trade>>,
    /// Trades between other participants since the previous snapshot.
    #[serde(default)]
    pub market_trades: BTreeMap<Symbol, Vec<Trade>>,
    /// Signed net position per symbol.
    #[serde(default)]
    pub position: BTreeMap<Symbol, i64>,
    #[serde(default)]
    pub observations: BTreeMap<String, i64>,
}

impl TradingState {
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            ..Default::default()
        }
    }

    /// Parse a snapshot from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Recent market trades for `symbol`, if the feed reported any.
    pub fn market_history(&self, symbol: &Symbol) -> Option<&[Trade]> {
        self.market_trades.get(symbol).map(Vec::as_slice)
    }

    /// Net position, zero when flat or unknown.
    pub fn position_of(&self, symbol: &Symbol) -> i64 {
        self.position.get(symbol).copied().unwrap_or(0)
    }

    /// Every symbol the snapshot mentions in its listings or books.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> + '_ {
        let mut seen: Vec<&Symbol> = self
            .listings
            .keys()
            .chain(self.order_depths.keys())
            .collect();
        seen.sort();
        seen.dedup();
        seen.into_iter()
    }
}
