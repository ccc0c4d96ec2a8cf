//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::indicators::{validate_windows, IndicatorError};
use crate::indicators::trend::{DEFAULT_LONG_WINDOW, DEFAULT_SHORT_WINDOW};

pub const DEFAULT_EXCHANGES: &str = "binance,kucoin,kraken";
pub const DEFAULT_SYMBOL: &str = "BTC/USDT";
pub const DEFAULT_TIMEFRAME: &str = "1d";
pub const DEFAULT_HISTORY_DAYS: i64 = 730;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid number: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },

    #[error(transparent)]
    Windows(#[from] IndicatorError),
}

/// Runtime environment name (`APP_ENV`), defaulting to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Exchange ids; the first one is the data source for history.
    pub exchanges: Vec<String>,
    pub symbols: Vec<String>,
    pub timeframe: String,
    pub history_days: i64,
    pub short_window: usize,
    pub long_window: usize,
    pub snapshot_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Reports that must be written for a run to count as successful.
    pub min_reports: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            exchanges: split_list(DEFAULT_EXCHANGES),
            symbols: vec![DEFAULT_SYMBOL.to_string()],
            timeframe: DEFAULT_TIMEFRAME.to_string(),
            history_days: DEFAULT_HISTORY_DAYS,
            short_window: DEFAULT_SHORT_WINDOW,
            long_window: DEFAULT_LONG_WINDOW,
            snapshot_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            min_reports: None,
        }
    }
}

impl AnalysisConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let exchanges = list_var(&lookup, "EXCHANGES")?.unwrap_or(defaults.exchanges);
        let symbols = list_var(&lookup, "SYMBOLS")?.unwrap_or(defaults.symbols);
        let timeframe = lookup("TIMEFRAME")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or(defaults.timeframe);
        let history_days = number_var(&lookup, "HISTORY_DAYS")?.unwrap_or(defaults.history_days);
        let short_window = number_var(&lookup, "SHORT_MA")?.unwrap_or(defaults.short_window);
        let long_window = number_var(&lookup, "LONG_MA")?.unwrap_or(defaults.long_window);
        validate_windows(short_window, long_window)?;

        let snapshot_dir = lookup("SNAPSHOT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.snapshot_dir);
        let output_dir = lookup("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let min_reports = number_var(&lookup, "MIN_REPORTS")?;

        Ok(Self {
            exchanges,
            symbols,
            timeframe,
            history_days,
            short_window,
            long_window,
            snapshot_dir,
            output_dir,
            min_reports,
        })
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.output_dir.join("reports")
    }

    pub fn primary_exchange(&self) -> Option<&str> {
        self.exchanges.first().map(String::as_str)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn list_var<F>(lookup: &F, name: &'static str) -> Result<Option<Vec<String>>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => {
            let values = split_list(&raw);
            if values.is_empty() {
                Err(ConfigError::Empty { name })
            } else {
                Ok(Some(values))
            }
        }
    }
}

fn number_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
    }
}
