//! Order generation.
//!
//! Crosses a fair value against both sides of one instrument's book:
//! - every ask strictly below fair value → buy at that ask
//! - every bid strictly above fair value → sell at that bid
//!
//! Asks are emitted lowest first, then bids highest first. Fills are
//! assumed instantaneous and complete at the quoted price.

use shoal_core::{Order, OrderDepth, Price, Symbol};
use tracing::debug;

use crate::error::StrategyResult;
use crate::sizing::SizingPolicy;

/// Propose orders for `symbol` against `depth` given fair value `estimate`.
///
/// Empty sides and books that never cross the estimate produce no orders
/// and are not errors.
pub fn generate_orders(
    symbol: &Symbol,
    estimate: Price,
    depth: &OrderDepth,
    sizing: &dyn SizingPolicy,
) -> StrategyResult<Vec<Order>> {
    let mut orders = Vec::new();

    for (ask, resting) in depth.asks_below(estimate) {
        let size = sizing.size(estimate, ask, resting)?;
        debug!(
            %symbol,
            estimate = %estimate,
            ask = %ask,
            resting = %resting,
            size = %size,
            "Ask below fair value, buying"
        );
        orders.push(Order::buy(symbol.clone(), ask, size));
    }

    for (bid, resting) in depth.bids_above(estimate) {
        let size = sizing.size(estimate, bid, resting)?;
        debug!(
            %symbol,
            estimate = %estimate,
            bid = %bid,
            resting = %resting,
            size = %size,
            "Bid above fair value, selling"
        );
        orders.push(Order::sell(symbol.clone(), bid, size));
    }

    Ok(orders)
}
