//! Offline exchange backed by a JSON snapshot of markets and candles.
//!
//! Snapshot layout:
//!
//! ```json
//! {
//!   "id": "binance",
//!   "rate_limit_ms": 50,
//!   "supports_ohlcv": true,
//!   "markets": [{ "symbol": "BTC/USDT", "base": "BTC", "quote": "USDT", "spot": true }],
//!   "candles": { "BTC/USDT": { "1d": [[1704067200000, 42000.0, 42800.0, 41500.0, 42500.0, 1250.5]] } }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::market::{MarketInfo, PriceBar};
use crate::services::error::FetchError;
use crate::services::market_data::MarketDataProvider;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotFile {
    id: String,
    #[serde(default)]
    rate_limit_ms: u64,
    #[serde(default)]
    supports_ohlcv: bool,
    #[serde(default)]
    markets: Vec<MarketInfo>,
    /// symbol -> timeframe -> rows of `[timestamp_ms, open, high, low, close, volume]`
    #[serde(default)]
    candles: HashMap<String, HashMap<String, Vec<[f64; 6]>>>,
}

#[derive(Debug, Clone)]
pub struct SnapshotExchange {
    id: String,
    rate_limit_ms: u64,
    supports_ohlcv: bool,
    markets: Vec<MarketInfo>,
    candles: HashMap<(String, String), Vec<PriceBar>>,
}

impl SnapshotExchange {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rate_limit_ms: 0,
            supports_ohlcv: true,
            markets: Vec::new(),
            candles: HashMap::new(),
        }
    }

    pub fn with_rate_limit(mut self, rate_limit_ms: u64) -> Self {
        self.rate_limit_ms = rate_limit_ms;
        self
    }

    pub fn with_ohlcv_support(mut self, supports_ohlcv: bool) -> Self {
        self.supports_ohlcv = supports_ohlcv;
        self
    }

    pub fn with_markets(mut self, markets: Vec<MarketInfo>) -> Self {
        self.markets = markets;
        self
    }

    pub fn with_candles(mut self, symbol: &str, timeframe: &str, mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.timestamp);
        self.candles
            .insert((symbol.to_string(), timeframe.to_string()), bars);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        let file: SnapshotFile = serde_json::from_str(json)?;
        let mut exchange = Self::new(file.id)
            .with_rate_limit(file.rate_limit_ms)
            .with_ohlcv_support(file.supports_ohlcv)
            .with_markets(file.markets);

        for (symbol, timeframes) in file.candles {
            for (timeframe, rows) in timeframes {
                let total = rows.len();
                let bars: Vec<PriceBar> = rows.into_iter().filter_map(PriceBar::from_row).collect();
                if bars.len() != total {
                    warn!(
                        exchange = %exchange.id,
                        symbol = %symbol,
                        skipped = total - bars.len(),
                        "Skipped candles with unrepresentable timestamps"
                    );
                }
                exchange = exchange.with_candles(&symbol, &timeframe, bars);
            }
        }

        Ok(exchange)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading exchange snapshot");
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }
}

#[async_trait]
impl MarketDataProvider for SnapshotExchange {
    fn id(&self) -> &str {
        &self.id
    }

    fn rate_limit_ms(&self) -> u64 {
        self.rate_limit_ms
    }

    fn supports_ohlcv(&self) -> bool {
        self.supports_ohlcv
    }

    async fn load_markets(&self) -> Result<Vec<MarketInfo>, FetchError> {
        Ok(self.markets.clone())
    }

    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        since: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<PriceBar>, FetchError> {
        let bars = self
            .candles
            .get(&(symbol.to_string(), timeframe.to_string()))
            .ok_or_else(|| FetchError::UnknownSymbol {
                exchange: self.id.clone(),
                symbol: symbol.to_string(),
                timeframe: timeframe.to_string(),
            })?;

        Ok(bars
            .iter()
            .filter(|b| b.timestamp >= since)
            .take(limit)
            .copied()
            .collect())
    }
}
