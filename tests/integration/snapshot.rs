//! Integration tests for the JSON snapshot exchange

use chrono::{TimeZone, Utc};
use coinlens::services::error::FetchError;
use coinlens::services::market_data::MarketDataProvider;
use coinlens::services::snapshot::SnapshotExchange;

use crate::test_utils::scratch_dir;

const SNAPSHOT: &str = r#"{
  "id": "kucoin",
  "rate_limit_ms": 100,
  "supports_ohlcv": true,
  "markets": [
    { "symbol": "BTC/USDT", "base": "BTC", "quote": "USDT", "spot": true },
    { "symbol": "ETH/BTC", "base": "ETH", "quote": "BTC", "spot": true, "active": false }
  ],
  "candles": {
    "BTC/USDT": {
      "1d": [
        [1704153600000, 42500.0, 43000.0, 42000.0, 42800.0, 900.0],
        [1704067200000, 42000.0, 42800.0, 41500.0, 42500.0, 1250.5],
        [1704240000000, 42800.0, 43500.0, 42600.0, 43200.0, 1100.0]
      ]
    }
  }
}"#;

#[test]
fn snapshot_parses_markets_and_sorts_candles() {
    let exchange = SnapshotExchange::from_json(SNAPSHOT).expect("valid snapshot");
    assert_eq!(exchange.id(), "kucoin");
    assert_eq!(exchange.rate_limit_ms(), 100);
    assert!(exchange.supports_ohlcv());

    let markets = tokio_test::block_on(exchange.load_markets()).expect("markets");
    assert_eq!(markets.len(), 2);
    assert!(markets[0].active);
    assert!(!markets[1].active);

    let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let bars = tokio_test::block_on(exchange.fetch_candles("BTC/USDT", "1d", since, 10))
        .expect("candles");
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    assert_eq!(closes, vec![42500.0, 42800.0, 43200.0]);
}

#[tokio::test]
async fn snapshot_pages_by_since_and_limit() {
    let exchange = SnapshotExchange::from_json(SNAPSHOT).unwrap();
    let since = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    let page = exchange.fetch_candles("BTC/USDT", "1d", since, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].timestamp, since);
}

#[tokio::test]
async fn snapshot_unknown_symbol_is_an_error() {
    let exchange = SnapshotExchange::from_json(SNAPSHOT).unwrap();
    let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let err = exchange.fetch_candles("BTC/USDT", "4h", since, 10).await.unwrap_err();
    assert!(matches!(err, FetchError::UnknownSymbol { ref timeframe, .. } if timeframe == "4h"));
}

#[tokio::test]
async fn snapshot_loads_from_disk() {
    let dir = scratch_dir("snapshot-load");
    let path = dir.join("kucoin.json");
    std::fs::write(&path, SNAPSHOT).unwrap();

    let exchange = SnapshotExchange::load(&path).await.expect("load snapshot");
    assert_eq!(exchange.id(), "kucoin");

    let missing = SnapshotExchange::load(dir.join("absent.json")).await.unwrap_err();
    assert!(matches!(missing, FetchError::Io(_)));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn snapshot_rejects_malformed_json() {
    let err = SnapshotExchange::from_json("{ \"rate_limit_ms\": 5 }").unwrap_err();
    assert!(matches!(err, FetchError::Json(_)));
}
