//! Built-in demo snapshot.
//!
//! Two listings quoted in SEASHELLS. PEARLS has only one market trade and
//! BANANAS none, so both fall under the default two-trade minimum and the
//! evaluation comes back empty. Useful as a smoke test of the wiring.

use rust_decimal::Decimal;
use shoal_core::{Listing, OrderDepth, Price, Quantity, Size, Symbol, Trade, TradingState};

pub const DEMO_TIMESTAMP: i64 = 1000;

pub fn demo_snapshot() -> TradingState {
    let pearls = Symbol::from("PEARLS");
    let bananas = Symbol::from("BANANAS");

    let mut state = TradingState::new(DEMO_TIMESTAMP);

    for symbol in [&pearls, &bananas] {
        state.listings.insert(
            symbol.clone(),
            Listing::new(symbol.clone(), symbol.as_str(), "SEASHELLS"),
        );
    }

    state.order_depths.insert(
        pearls.clone(),
        OrderDepth::new()
            .with_bid(px(10), sz(7))
            .with_bid(px(9), sz(5)),
    );
    state.order_depths.insert(
        bananas.clone(),
        OrderDepth::new()
            .with_ask(px(11), sz(4))
            .with_ask(px(12), sz(8)),
    );

    state.own_trades.insert(pearls.clone(), Vec::new());
    state.own_trades.insert(bananas.clone(), Vec::new());

    state.market_trades.insert(
        pearls.clone(),
        vec![Trade::new(
            pearls.clone(),
            px(11),
            Quantity::new(Decimal::from(4)),
            900,
        )],
    );
    state.market_trades.insert(bananas.clone(), Vec::new());

    state.position.insert(pearls, 3);
    state.position.insert(bananas, -5);

    state
}

fn px(v: i64) -> Price {
    Price::new(Decimal::from(v))
}

fn sz(v: i64) -> Size {
    Size::new(Decimal::from(v))
}
