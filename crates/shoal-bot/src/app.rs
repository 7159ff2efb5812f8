//! Application wiring.
//!
//! One run = load snapshot → validate against the registry → evaluate →
//! render. There is no loop; the process exits after a single evaluation.

use shoal_core::TradingState;
use shoal_strategy::{Evaluation, Trader};
use tracing::{info, warn};

use crate::config::{AppConfig, OutputFormat};
use crate::demo::demo_snapshot;
use crate::error::AppResult;
use crate::report::EvaluationReport;

pub struct Application {
    config: AppConfig,
    trader: Trader,
}

impl Application {
    /// Build the engine. Configuration errors are fatal here.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let trader = Trader::new(config.strategy.clone())?;
        Ok(Self { config, trader })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn trader(&self) -> &Trader {
        &self.trader
    }

    /// Load the configured snapshot, or the demo snapshot when none is set.
    pub fn load_snapshot(&self) -> AppResult<TradingState> {
        match self.config.snapshot_path.as_deref() {
            Some(path) => {
                info!(path, "Loading snapshot");
                let content = std::fs::read_to_string(path)?;
                Ok(TradingState::from_json(&content)?)
            }
            None => {
                info!("No snapshot configured, using demo snapshot");
                Ok(demo_snapshot())
            }
        }
    }

    /// Evaluate `state` once.
    ///
    /// Every symbol in the snapshot must be bound before anything is
    /// evaluated. In strict mode any instrument failure fails the run.
    pub fn evaluate(&self, state: &TradingState) -> AppResult<Evaluation> {
        self.trader.validate_snapshot(state)?;

        let evaluation = self.trader.evaluate(state);
        info!(
            timestamp = evaluation.timestamp,
            instruments = evaluation.orders.len(),
            orders = evaluation.order_count(),
            skipped = evaluation.skipped.len(),
            failures = evaluation.failures.len(),
            "Snapshot evaluated"
        );

        if let Some((symbol, e)) = evaluation.failures.iter().next() {
            if self.config.strict {
                warn!(%symbol, "Strict mode, aborting on instrument failure");
                return Err(e.clone().into());
            }
            warn!(
                failures = evaluation.failures.len(),
                "Some instruments failed, continuing"
            );
        }

        Ok(evaluation)
    }

    pub fn render(&self, evaluation: &Evaluation) -> AppResult<String> {
        let report = EvaluationReport::from(evaluation);
        match self.config.output {
            OutputFormat::Text => Ok(report.to_text()),
            OutputFormat::Json => Ok(report.to_json()?),
        }
    }

    /// Load, evaluate and render in one go.
    pub fn run(&self) -> AppResult<String> {
        let state = self.load_snapshot()?;
        let evaluation = self.evaluate(&state)?;
        self.render(&evaluation)
    }
}
