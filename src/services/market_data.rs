//! Market data provider interface implemented by exchange integrations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::market::{MarketInfo, PriceBar};
use crate::services::error::FetchError;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Exchange identifier, e.g. `binance`.
    fn id(&self) -> &str;

    /// Minimum delay between requests advertised by the exchange.
    fn rate_limit_ms(&self) -> u64;

    fn supports_ohlcv(&self) -> bool;

    /// All markets listed on the exchange.
    async fn load_markets(&self) -> Result<Vec<MarketInfo>, FetchError>;

    /// One page of candles starting at `since` (inclusive), at most `limit` long.
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        since: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<PriceBar>, FetchError>;
}
