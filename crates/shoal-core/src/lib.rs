//! Core domain types for the shoal strategy evaluator.
//!
//! This crate provides the data model shared by the engine and the harness:
//! - `Symbol`, `Listing`: instrument identification
//! - `Price`, `Size`, `Quantity`: precision-safe numeric types
//! - `OrderDepth`: two-sided, sorted order book for one instrument
//! - `Trade`, `Order`, `OrderSide`: market records and engine output
//! - `TradingState`: one complete snapshot handed to the engine

pub mod book;
pub mod decimal;
pub mod error;
pub mod order;
pub mod state;
pub mod symbol;
pub mod trade;

pub use book::OrderDepth;
pub use decimal::{Price, Quantity, Size};
pub use error::{CoreError, Result};
pub use order::{Order, OrderSide};
pub use state::TradingState;
pub use symbol::{Listing, Symbol};
pub use trade::Trade;
