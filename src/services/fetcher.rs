//! Paginated historical OHLCV download.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::models::market::{PriceBar, PriceSeries};
use crate::services::error::FetchError;
use crate::services::market_data::MarketDataProvider;

pub const DEFAULT_PAGE_LIMIT: usize = 1000;

pub struct HistoryFetcher<'a> {
    provider: &'a dyn MarketDataProvider,
    page_limit: usize,
}

impl<'a> HistoryFetcher<'a> {
    pub fn new(provider: &'a dyn MarketDataProvider) -> Self {
        Self {
            provider,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit.max(1);
        self
    }

    /// Fetch `days` of history ending now.
    pub async fn fetch(
        &self,
        symbol: &str,
        timeframe: &str,
        days: i64,
    ) -> Result<PriceSeries, FetchError> {
        let since = Utc::now() - Duration::days(days);
        self.fetch_since(symbol, timeframe, since).await
    }

    /// Page forward from `since` until the exchange returns an empty page.
    ///
    /// A failing page ends the download; candles collected before the failure
    /// are kept. The result is sorted, deduplicated and validated.
    pub async fn fetch_since(
        &self,
        symbol: &str,
        timeframe: &str,
        since: DateTime<Utc>,
    ) -> Result<PriceSeries, FetchError> {
        let exchange = self.provider.id();
        if !self.provider.supports_ohlcv() {
            return Err(FetchError::Unsupported {
                exchange: exchange.to_string(),
            });
        }

        info!(exchange, symbol, timeframe, since = %since, "Fetching OHLCV history");

        let mut cursor = since;
        let mut bars: Vec<PriceBar> = Vec::new();
        loop {
            let page = match self
                .provider
                .fetch_candles(symbol, timeframe, cursor, self.page_limit)
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    warn!(exchange, symbol, error = %e, "Error fetching OHLCV page, keeping {} candles", bars.len());
                    break;
                }
            };

            let Some(last) = page.last() else {
                break;
            };
            let next = last.timestamp + Duration::milliseconds(1);
            if next <= cursor {
                warn!(exchange, symbol, "OHLCV page did not advance, stopping");
                break;
            }
            cursor = next;

            bars.extend(page);
            debug!(exchange, symbol, total = bars.len(), "Fetched OHLCV page");
        }

        let series = PriceSeries::from_bars(bars);
        info!(exchange, symbol, candles = series.len(), "Fetched OHLCV history");
        Ok(series)
    }
}
