//! Per-instrument order book.
//!
//! Both sides are kept as sorted maps so that "best level" is O(log n) and
//! "every level crossing a threshold" is a range walk over exactly the
//! qualifying levels:
//! - asks ascending (best = lowest)
//! - bids descending (best = highest)
//!
//! Quantities are stored as non-negative magnitudes. Sidedness is purely
//! positional. The exchange wire format publishes sell quantities as
//! negative numbers; those are normalized to magnitudes on the way in.
//!
//! No `bid < ask` invariant is enforced: crossed and one-sided books are
//! representable.

use crate::error::CoreError;
use crate::{Price, Size};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Resting liquidity for one instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderDepthWire", into = "OrderDepthWire")]
pub struct OrderDepth {
    asks: BTreeMap<Price, Size>,
    bids: BTreeMap<Reverse<Price>, Size>,
}

impl OrderDepth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resting size at an ask level. A zero size removes the level.
    pub fn insert_ask(&mut self, price: Price, size: Size) {
        if size.is_zero() {
            self.asks.remove(&price);
        } else {
            self.asks.insert(price, size);
        }
    }

    /// Set the resting size at a bid level. A zero size removes the level.
    pub fn insert_bid(&mut self, price: Price, size: Size) {
        if size.is_zero() {
            self.bids.remove(&Reverse(price));
        } else {
            self.bids.insert(Reverse(price), size);
        }
    }

    /// Builder form of [`insert_ask`](Self::insert_ask).
    pub fn with_ask(mut self, price: Price, size: Size) -> Self {
        self.insert_ask(price, size);
        self
    }

    /// Builder form of [`insert_bid`](Self::insert_bid).
    pub fn with_bid(mut self, price: Price, size: Size) -> Self {
        self.insert_bid(price, size);
        self
    }

    /// Lowest ask.
    pub fn best_ask(&self) -> Option<(Price, Size)> {
        self.asks.iter().next().map(|(p, s)| (*p, *s))
    }

    /// Highest bid.
    pub fn best_bid(&self) -> Option<(Price, Size)> {
        self.bids.iter().next().map(|(p, s)| (p.0, *s))
    }

    /// Best ask minus best bid. Negative for a crossed book, `None` when a
    /// side is empty or the difference overflows.
    pub fn spread(&self) -> Option<Decimal> {
        self.best_ask()?
            .0
            .inner()
            .checked_sub(self.best_bid()?.0.inner())
    }

    /// Ask levels priced strictly below `threshold`, lowest first.
    pub fn asks_below(&self, threshold: Price) -> impl Iterator<Item = (Price, Size)> + '_ {
        self.asks.range(..threshold).map(|(p, s)| (*p, *s))
    }

    /// Bid levels priced strictly above `threshold`, highest first.
    pub fn bids_above(&self, threshold: Price) -> impl Iterator<Item = (Price, Size)> + '_ {
        // Reverse(p) < Reverse(t) <=> p > t
        self.bids.range(..Reverse(threshold)).map(|(p, s)| (p.0, *s))
    }

    /// All ask levels, lowest first.
    pub fn asks(&self) -> impl Iterator<Item = (Price, Size)> + '_ {
        self.asks.iter().map(|(p, s)| (*p, *s))
    }

    /// All bid levels, highest first.
    pub fn bids(&self) -> impl Iterator<Item = (Price, Size)> + '_ {
        self.bids.iter().map(|(p, s)| (p.0, *s))
    }

    pub fn ask_levels(&self) -> usize {
        self.asks.len()
    }

    pub fn bid_levels(&self) -> usize {
        self.bids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }
}

/// Exchange wire shape: `{"buy_orders": {"10": 7}, "sell_orders": {"11": -4}}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct OrderDepthWire {
    #[serde(default)]
    buy_orders: BTreeMap<String, Decimal>,
    #[serde(default)]
    sell_orders: BTreeMap<String, Decimal>,
}

impl TryFrom<OrderDepthWire> for OrderDepth {
    type Error = CoreError;

    fn try_from(wire: OrderDepthWire) -> Result<Self, Self::Error> {
        let mut depth = OrderDepth::new();
        for (price, qty) in wire.buy_orders {
            depth.insert_bid(parse_level_price(&price)?, Size::from_magnitude(qty));
        }
        for (price, qty) in wire.sell_orders {
            depth.insert_ask(parse_level_price(&price)?, Size::from_magnitude(qty));
        }
        Ok(depth)
    }
}

impl From<OrderDepth> for OrderDepthWire {
    fn from(depth: OrderDepth) -> Self {
        Self {
            buy_orders: depth
                .bids()
                .map(|(p, s)| (p.to_string(), s.inner()))
                .collect(),
            sell_orders: depth
                .asks()
                .map(|(p, s)| (p.to_string(), -s.inner()))
                .collect(),
        }
    }
}

fn parse_level_price(raw: &str) -> Result<Price, CoreError> {
    raw.trim()
        .parse::<Price>()
        .map_err(|e| CoreError::InvalidPrice(format!("{raw}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn px(d: Decimal) -> Price {
        Price::new(d)
    }

    fn sz(d: Decimal) -> Size {
        Size::new(d)
    }

    fn scenario_book() -> OrderDepth {
        OrderDepth::new()
            .with_ask(px(dec!(12)), sz(dec!(8)))
            .with_ask(px(dec!(11)), sz(dec!(4)))
            .with_bid(px(dec!(9)), sz(dec!(5)))
            .with_bid(px(dec!(10)), sz(dec!(7)))
    }

    #[test]
    fn test_best_levels() {
        let book = scenario_book();
        assert_eq!(book.best_ask(), Some((px(dec!(11)), sz(dec!(4)))));
        assert_eq!(book.best_bid(), Some((px(dec!(10)), sz(dec!(7)))));
        assert_eq!(book.spread(), Some(dec!(1)));
    }

    #[test]
    fn test_asks_below_is_strict_and_ascending() {
        let book = scenario_book();

        let at_eleven: Vec<_> = book.asks_below(px(dec!(11))).collect();
        assert!(at_eleven.is_empty());

        let above_all: Vec<_> = book.asks_below(px(dec!(13))).map(|(p, _)| p).collect();
        assert_eq!(above_all, vec![px(dec!(11)), px(dec!(12))]);
    }

    #[test]
    fn test_bids_above_is_strict_and_descending() {
        let book = scenario_book();

        let at_ten: Vec<_> = book.bids_above(px(dec!(10))).collect();
        assert!(at_ten.is_empty());

        let below_all: Vec<_> = book.bids_above(px(dec!(8.5))).map(|(p, _)| p).collect();
        assert_eq!(below_all, vec![px(dec!(10)), px(dec!(9))]);
    }

    #[test]
    fn test_zero_size_removes_level() {
        let mut book = scenario_book();
        book.insert_ask(px(dec!(11)), Size::ZERO);
        book.insert_bid(px(dec!(10)), Size::ZERO);

        assert_eq!(book.best_ask().map(|(p, _)| p), Some(px(dec!(12))));
        assert_eq!(book.best_bid().map(|(p, _)| p), Some(px(dec!(9))));
        assert_eq!(book.ask_levels(), 1);
        assert_eq!(book.bid_levels(), 1);
    }

    #[test]
    fn test_crossed_book_is_representable() {
        let book = OrderDepth::new()
            .with_ask(px(dec!(9)), sz(dec!(1)))
            .with_bid(px(dec!(10)), sz(dec!(1)));
        assert_eq!(book.spread(), Some(dec!(-1)));
    }

    #[test]
    fn test_empty_book() {
        let book = OrderDepth::new();
        assert!(book.is_empty());
        assert!(book.best_ask().is_none());
        assert!(book.spread().is_none());
    }

    #[test]
    fn test_spread_overflow_is_none() {
        let book = OrderDepth::new()
            .with_ask(px(Decimal::MAX), sz(dec!(1)))
            .with_bid(px(Decimal::MIN), sz(dec!(1)));
        assert!(book.spread().is_none());
        assert_eq!(book.asks_below(px(dec!(100))).count(), 0);
    }

    #[test]
    fn test_wire_format_normalizes_negative_asks() {
        let json = r#"{"buy_orders": {"10": 7, "9": 5}, "sell_orders": {"11": -4, "12": -8}}"#;
        let book: OrderDepth = serde_json::from_str(json).unwrap();

        assert_eq!(book.best_ask(), Some((px(dec!(11)), sz(dec!(4)))));
        assert_eq!(book.asks().nth(1), Some((px(dec!(12)), sz(dec!(8)))));
        assert_eq!(book.best_bid(), Some((px(dec!(10)), sz(dec!(7)))));
    }

    #[test]
    fn test_wire_format_missing_side_is_empty() {
        let book: OrderDepth = serde_json::from_str(r#"{"buy_orders": {"10": 7}}"#).unwrap();
        assert_eq!(book.ask_levels(), 0);
        assert_eq!(book.bid_levels(), 1);
    }

    #[test]
    fn test_wire_format_rejects_bad_price_key() {
        let result: Result<OrderDepth, _> =
            serde_json::from_str(r#"{"sell_orders": {"eleven": -4}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_wire_format_writes_asks_negative() {
        let value = serde_json::to_value(scenario_book()).unwrap();
        assert_eq!(value["sell_orders"]["11"], serde_json::json!("-4"));
        assert_eq!(value["buy_orders"]["10"], serde_json::json!("7"));
    }
}
