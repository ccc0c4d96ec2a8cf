//! Unit tests for environment configuration

use std::collections::HashMap;
use std::path::PathBuf;

use coinlens::config::{AnalysisConfig, ConfigError};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_defaults() {
    let config = AnalysisConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, AnalysisConfig::default());
    assert_eq!(config.primary_exchange(), Some("binance"));
    assert_eq!(config.symbols, vec!["BTC/USDT".to_string()]);
    assert_eq!((config.short_window, config.long_window), (50, 200));
    assert_eq!(config.reports_dir(), PathBuf::from("output").join("reports"));
}

#[test]
fn test_overrides() {
    let config = AnalysisConfig::from_lookup(lookup(&[
        ("EXCHANGES", " kraken , bitstamp "),
        ("SYMBOLS", "ETH/USDT,SOL/USDT"),
        ("TIMEFRAME", "4h"),
        ("HISTORY_DAYS", "90"),
        ("SHORT_MA", "20"),
        ("LONG_MA", "100"),
        ("OUTPUT_DIR", "/tmp/out"),
        ("MIN_REPORTS", "2"),
    ]))
    .unwrap();

    assert_eq!(config.exchanges, vec!["kraken".to_string(), "bitstamp".to_string()]);
    assert_eq!(config.symbols, vec!["ETH/USDT".to_string(), "SOL/USDT".to_string()]);
    assert_eq!(config.timeframe, "4h");
    assert_eq!(config.history_days, 90);
    assert_eq!((config.short_window, config.long_window), (20, 100));
    assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    assert_eq!(config.min_reports, Some(2));
}

#[test]
fn test_invalid_number() {
    let err = AnalysisConfig::from_lookup(lookup(&[("LONG_MA", "two hundred")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { name: "LONG_MA", .. }));
}

#[test]
fn test_window_order_enforced() {
    let err = AnalysisConfig::from_lookup(lookup(&[("SHORT_MA", "200"), ("LONG_MA", "50")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Windows(_)));
}

#[test]
fn test_empty_list_rejected() {
    let err = AnalysisConfig::from_lookup(lookup(&[("SYMBOLS", " , ")])).unwrap_err();
    assert!(matches!(err, ConfigError::Empty { name: "SYMBOLS" }));
}
