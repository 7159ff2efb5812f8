//! Single-shot harness for the shoal evaluator.
//!
//! Loads configuration and one trading snapshot, builds the engine,
//! evaluates the snapshot once and renders the proposed orders. Nothing is
//! sent anywhere; transmitting orders is the caller's business.

pub mod app;
pub mod config;
pub mod demo;
pub mod error;
pub mod report;

pub use app::Application;
pub use config::{AppConfig, OutputFormat};
pub use error::{AppError, AppResult};
pub use report::EvaluationReport;
