//! Executed trade records.

use crate::{Price, Quantity, Symbol};
use serde::{Deserialize, Serialize};

/// One executed trade as reported by the market-data feed.
///
/// Records are immutable once published. `quantity` is signed; the sign
/// follows whatever convention the feed uses and is consumed unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: Symbol,
    pub price: Price,
    pub quantity: Quantity,
    #[serde(default)]
    pub buyer: String,
    #[serde(default)]
    pub seller: String,
    /// Exchange tick at which the trade printed.
    #[serde(default)]
    pub timestamp: i64,
}

impl Trade {
    /// Create an anonymous trade record.
    pub fn new(symbol: Symbol, price: Price, quantity: Quantity, timestamp: i64) -> Self {
        Self {
            symbol,
            price,
            quantity,
            buyer: String::new(),
            seller: String::new(),
            timestamp,
        }
    }
}
