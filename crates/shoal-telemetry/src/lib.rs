//! Structured logging for the shoal evaluator.
//!
//! JSON lines in production, pretty output everywhere else.

pub mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, DEFAULT_FILTER};
