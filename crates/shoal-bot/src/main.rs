//! shoal evaluator - entry point
//!
//! Evaluates one trading snapshot and prints the proposed orders.

use anyhow::Result;
use clap::Parser;
use shoal_bot::{AppConfig, Application, OutputFormat};
use tracing::info;

/// Evaluate a trading snapshot and print the proposed orders
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via SHOAL_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Snapshot JSON to evaluate (overrides the config file)
    #[arg(short, long)]
    snapshot: Option<String>,

    /// Print the evaluation as JSON
    #[arg(long)]
    json: bool,

    /// Fail if any instrument fails to evaluate
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // CLI arg > SHOAL_CONFIG env var > config/default.toml > defaults
    let mut config = match args.config.as_deref() {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    if let Some(snapshot) = args.snapshot {
        config.snapshot_path = Some(snapshot);
    }
    if args.json {
        config.output = OutputFormat::Json;
    }
    config.strict |= args.strict;

    shoal_telemetry::init_logging(Some(config.telemetry.log_level.as_str()))?;

    info!("Starting shoal evaluator v{}", env!("CARGO_PKG_VERSION"));
    info!(
        instruments = config.strategy.instruments.len(),
        min_history = config.strategy.min_history,
        output = ?config.output,
        strict = config.strict,
        "Configuration loaded"
    );

    let app = Application::new(config)?;
    let rendered = app.run()?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    Ok(())
}
