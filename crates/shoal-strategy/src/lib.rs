//! Decision engine for the shoal evaluator.
//!
//! Turns one `TradingState` snapshot into a set of proposed orders per
//! instrument. Stateless: nothing survives between evaluations.
//!
//! # Architecture
//!
//! ```text
//! TradingState ─→ Trader.evaluate()
//!                  for each symbol in order_depths:
//!                  ├─ skip when market history < min_history
//!                  ├─ FairValuePredictor: history → fair value
//!                  └─ generate_orders(): cross book against fair value
//!                       ├─ asks below fair value → buys
//!                       ├─ bids above fair value → sells
//!                       └─ SizingPolicy: volume per crossed level
//!                  ↓
//!                 Evaluation { orders, failures, skipped }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod generator;
pub mod predictor;
pub mod registry;
pub mod sizing;

pub use config::{InstrumentBinding, PredictorKind, SizingKind, StrategyConfig};
pub use engine::Trader;
pub use error::{StrategyError, StrategyResult};
pub use evaluation::Evaluation;
pub use generator::generate_orders;
pub use predictor::{FairValuePredictor, Vwap};
pub use registry::{InstrumentStrategy, StrategyRegistry};
pub use sizing::{FullSize, LinearConfidence, SizingPolicy};
