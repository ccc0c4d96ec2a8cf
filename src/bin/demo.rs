//! Coinlens demo
//!
//! Runs the full analysis over a deterministic synthetic two-year daily
//! series, without exchange snapshots.

use std::sync::Arc;

use anyhow::Context;
use chrono::{Duration, Utc};
use coinlens::config::AnalysisConfig;
use coinlens::core::analyzer::Analyzer;
use coinlens::logging;
use coinlens::models::market::{MarketInfo, PriceBar};
use coinlens::reports::{JsonReportSink, ReportPublisher, TextReportSink};
use coinlens::services::market_data::MarketDataProvider;
use coinlens::services::snapshot::SnapshotExchange;
use dotenvy::dotenv;
use tracing::info;

const DEMO_DAYS: i64 = 730;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init_logging();

    let mut config = AnalysisConfig::from_env().context("invalid configuration")?;
    config.exchanges = vec!["demo".to_string()];
    config.history_days = DEMO_DAYS;
    info!(symbols = ?config.symbols, "Running demo analysis on synthetic data");

    let mut exchange = SnapshotExchange::new("demo")
        .with_rate_limit(50)
        .with_markets(demo_markets(&config.symbols));
    for (i, symbol) in config.symbols.iter().enumerate() {
        exchange = exchange.with_candles(symbol, &config.timeframe, synthetic_bars(i as f64));
    }
    let exchanges: Vec<Arc<dyn MarketDataProvider>> = vec![Arc::new(exchange)];

    let reports_dir = config.reports_dir();
    let publisher = ReportPublisher::new()
        .with_sink(JsonReportSink::new(&reports_dir))
        .with_sink(TextReportSink::new(&reports_dir));

    let summary = Analyzer::new(config, exchanges, publisher)
        .run()
        .await
        .context("demo analysis failed")?;

    for report in &summary.reports {
        println!(
            "{}: {} (Confidence: {}) - {}",
            report.symbol,
            report.signal.signal,
            report.signal.confidence,
            report.signal.reasoning_text()
        );
        for path in &report.reports {
            println!("  → {}", path.display());
        }
    }
    Ok(())
}

fn demo_markets(symbols: &[String]) -> Vec<MarketInfo> {
    symbols
        .iter()
        .filter_map(|symbol| {
            let (base, quote) = symbol.split_once('/')?;
            Some(MarketInfo {
                symbol: symbol.clone(),
                base: base.to_string(),
                quote: quote.to_string(),
                spot: true,
                active: true,
            })
        })
        .collect()
}

/// Upward drift with two superimposed cycles; `phase` shifts the cycles per symbol.
fn synthetic_bars(phase: f64) -> Vec<PriceBar> {
    let start = Utc::now() - Duration::days(DEMO_DAYS - 1);
    (0..DEMO_DAYS)
        .map(|day| {
            let t = day as f64;
            let close = 40_000.0
                + t * 13.7
                + 4_000.0 * ((t + phase * 37.0) / 45.0).sin()
                + 900.0 * ((t + phase * 11.0) / 7.0).sin();
            let open = close * (1.0 + 0.004 * (t / 3.0).cos());
            let high = open.max(close) * 1.012;
            let low = open.min(close) * 0.988;
            let volume = 2_000_000.0 + 750_000.0 * (t / 5.0).sin().abs();
            PriceBar::new(open, high, low, close, volume, start + Duration::days(day))
        })
        .collect()
}
