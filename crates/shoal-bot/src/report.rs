//! Serializable view of an evaluation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shoal_core::{Order, Symbol};
use shoal_strategy::Evaluation;
use std::collections::BTreeMap;

/// What the harness prints in JSON mode.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub timestamp: i64,
    pub evaluated_at: DateTime<Utc>,
    pub orders: BTreeMap<Symbol, Vec<Order>>,
    /// Error message per failed instrument.
    pub failures: BTreeMap<Symbol, String>,
    pub skipped: Vec<Symbol>,
}

impl From<&Evaluation> for EvaluationReport {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            timestamp: evaluation.timestamp,
            evaluated_at: evaluation.evaluated_at,
            orders: evaluation.orders.clone(),
            failures: evaluation
                .failures
                .iter()
                .map(|(symbol, e)| (symbol.clone(), e.to_string()))
                .collect(),
            skipped: evaluation.skipped.clone(),
        }
    }
}

impl EvaluationReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// One `(symbol, [orders])` line per evaluated instrument, then one
    /// `(symbol, error)` line per failure.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.orders.len() + self.failures.len());

        for (symbol, orders) in &self.orders {
            let rendered: Vec<String> = orders.iter().map(ToString::to_string).collect();
            lines.push(format!("({symbol}, [{}])", rendered.join(", ")));
        }
        for (symbol, error) in &self.failures {
            lines.push(format!("({symbol}, error: {error})"));
        }

        lines.join("\n")
    }
}
