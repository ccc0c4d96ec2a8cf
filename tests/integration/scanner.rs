//! Integration tests for the exchange market scanner

use std::sync::Arc;

use coinlens::services::market_data::MarketDataProvider;
use coinlens::services::scanner::MarketScanner;
use coinlens::services::snapshot::SnapshotExchange;

use crate::test_utils::{market, FlakyProvider};

fn listed_exchange() -> SnapshotExchange {
    SnapshotExchange::new("binance")
        .with_rate_limit(50)
        .with_markets(vec![
            market("BTC/USDT", true, true),
            market("ETH/USDT", true, true),
            market("ETH/BTC", true, true),
            market("LUNA/USDT", true, false),
            market("BTC/USDT:USDT", false, true),
        ])
}

#[tokio::test]
async fn scanner_counts_active_spot_and_usdt_pairs() {
    let summary = MarketScanner::analyze_exchange(&listed_exchange()).await;

    assert_eq!(summary.name, "binance");
    assert_eq!(summary.total_spot_pairs, 3);
    assert_eq!(summary.usdt_quoted_pairs, 2);
    assert!(summary.supports_ohlcv);
    assert_eq!(summary.rate_limit_ms, 50);
}

#[tokio::test]
async fn scanner_reports_zero_counts_when_markets_fail() {
    let provider = FlakyProvider::new(listed_exchange()).failing_from(0);
    let summary = MarketScanner::analyze_exchange(&provider).await;

    assert_eq!(summary.name, "binance");
    assert_eq!(summary.total_spot_pairs, 0);
    assert_eq!(summary.usdt_quoted_pairs, 0);
    assert!(!summary.supports_ohlcv);
    assert_eq!(summary.rate_limit_ms, 50);
}

#[tokio::test]
async fn scan_all_keeps_exchange_order() {
    let providers: Vec<Arc<dyn MarketDataProvider>> = vec![
        Arc::new(SnapshotExchange::new("kraken").with_ohlcv_support(false)),
        Arc::new(listed_exchange()),
    ];
    let summaries = MarketScanner::scan_all(&providers).await;

    let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["kraken", "binance"]);
    assert!(!summaries[0].supports_ohlcv);
    assert_eq!(summaries[0].total_spot_pairs, 0);
}
