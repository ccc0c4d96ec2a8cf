//! Coinlens analyzer
//!
//! Scans the configured exchanges, analyzes each symbol on the primary
//! exchange and writes reports. Configuration comes from the environment
//! (see `AnalysisConfig::from_env`).

use anyhow::Context;
use coinlens::config::{get_environment, AnalysisConfig};
use coinlens::core::analyzer::{Analyzer, RunSummary};
use coinlens::logging;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = AnalysisConfig::from_env().context("invalid configuration")?;
    info!(environment = %get_environment(), "Starting Coinlens");
    info!(
        exchanges = ?config.exchanges,
        symbols = ?config.symbols,
        timeframe = %config.timeframe,
        history_days = config.history_days,
        short_ma = config.short_window,
        long_ma = config.long_window,
        "Configuration loaded"
    );

    let analyzer = Analyzer::from_config(config).await;
    let summary = analyzer.run().await.context("analysis failed")?;
    print_summary(&summary, analyzer.config().reports_dir().display());

    Ok(())
}

fn print_summary(summary: &RunSummary, reports_dir: impl std::fmt::Display) {
    println!("{}", "=".repeat(60));
    println!("ANALYSIS COMPLETE");
    println!("{}", "=".repeat(60));
    println!("Reports saved to: {reports_dir}/");
    for report in &summary.reports {
        println!();
        println!(
            "{}: {} (Confidence: {}, Score: {:+})",
            report.symbol, report.signal.signal, report.signal.confidence, report.signal.score
        );
        for suggestion in &report.suggestions {
            println!("  • {suggestion}");
        }
        for path in &report.reports {
            println!("  → {}", path.display());
        }
    }
    for (symbol, error) in &summary.failures {
        println!();
        println!("{symbol}: FAILED ({error})");
    }
    println!("{}", "=".repeat(60));
}
