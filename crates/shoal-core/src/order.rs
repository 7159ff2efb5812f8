//! Order types produced by the engine.
//!
//! An `Order` is a price plus a signed quantity: positive buys, negative
//! sells. Ownership passes to the caller as soon as it is returned.

use crate::{Price, Quantity, Size, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side: buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Returns the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Returns 1 for buy, -1 for sell (for position calculations).
    pub fn sign(&self) -> i8 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Proposed order for one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub symbol: Symbol,
    pub price: Price,
    /// Positive = buy, negative = sell.
    pub quantity: Quantity,
}

impl Order {
    pub fn new(symbol: Symbol, price: Price, quantity: Quantity) -> Self {
        Self {
            symbol,
            price,
            quantity,
        }
    }

    /// Buy `size` at `price`.
    pub fn buy(symbol: Symbol, price: Price, size: Size) -> Self {
        Self::new(symbol, price, size.to_buy())
    }

    /// Sell `size` at `price`.
    pub fn sell(symbol: Symbol, price: Price, size: Size) -> Self {
        Self::new(symbol, price, size.to_sell())
    }

    /// Side implied by the quantity sign. `None` for a zero quantity.
    pub fn side(&self) -> Option<OrderSide> {
        if self.quantity.is_positive() {
            Some(OrderSide::Buy)
        } else if self.quantity.is_negative() {
            Some(OrderSide::Sell)
        } else {
            None
        }
    }

    /// Unsigned volume of the order.
    pub fn size(&self) -> Size {
        self.quantity.abs()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.symbol, self.price, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_side_opposite() {
        assert_eq!(OrderSide::Buy.opposite(), OrderSide::Sell);
        assert_eq!(OrderSide::Sell.opposite(), OrderSide::Buy);
    }

    #[test]
    fn test_order_side_sign() {
        assert_eq!(OrderSide::Buy.sign(), 1);
        assert_eq!(OrderSide::Sell.sign(), -1);
    }

    #[test]
    fn test_order_side_from_quantity_sign() {
        let buy = Order::buy("A".into(), Price::new(dec!(11)), Size::new(dec!(4)));
        let sell = Order::sell("A".into(), Price::new(dec!(10)), Size::new(dec!(7)));

        assert_eq!(buy.side(), Some(OrderSide::Buy));
        assert_eq!(sell.side(), Some(OrderSide::Sell));
        assert_eq!(sell.quantity.inner(), dec!(-7));
        assert_eq!(sell.size(), Size::new(dec!(7)));

        let flat = Order::new("A".into(), Price::new(dec!(10)), Quantity::ZERO);
        assert_eq!(flat.side(), None);
    }

    #[test]
    fn test_order_json_round_trip_keeps_sign() {
        let order = Order::sell("BANANAS".into(), Price::new(dec!(10.5)), Size::new(dec!(0.35)));

        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();

        assert_eq!(back, order);
        assert_eq!(back.symbol.as_str(), "BANANAS");
        assert_eq!(back.price.inner(), dec!(10.5));
        assert_eq!(back.quantity.inner(), dec!(-0.35));
        assert_eq!(back.side(), Some(OrderSide::Sell));
    }

    #[test]
    fn test_order_display() {
        let order = Order::buy("PEARLS".into(), Price::new(dec!(11)), Size::new(dec!(4)));
        assert_eq!(order.to_string(), "(PEARLS, 11, 4)");
    }
}
