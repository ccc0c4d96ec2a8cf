//! Exchange market scan producing the comparison table.

use std::sync::Arc;

use tracing::{error, info};

use crate::models::market::ExchangeSummary;
use crate::services::market_data::MarketDataProvider;

pub const USDT: &str = "USDT";

pub struct MarketScanner;

impl MarketScanner {
    /// Count active spot markets and USDT-quoted ones.
    ///
    /// A failing market listing still yields a summary, with zero counts.
    pub async fn analyze_exchange(provider: &dyn MarketDataProvider) -> ExchangeSummary {
        let mut summary = ExchangeSummary::new(provider.id(), provider.rate_limit_ms());

        match provider.load_markets().await {
            Ok(markets) => {
                let spot: Vec<_> = markets.iter().filter(|m| m.spot && m.active).collect();
                summary.total_spot_pairs = spot.len();
                summary.usdt_quoted_pairs = spot.iter().filter(|m| m.quote == USDT).count();
                summary.supports_ohlcv = provider.supports_ohlcv();
            }
            Err(e) => {
                error!(exchange = provider.id(), error = %e, "Failed to analyze exchange");
            }
        }

        summary
    }

    pub async fn scan_all(providers: &[Arc<dyn MarketDataProvider>]) -> Vec<ExchangeSummary> {
        let mut summaries = Vec::with_capacity(providers.len());
        for provider in providers {
            info!(exchange = provider.id(), "Scanning exchange");
            summaries.push(Self::analyze_exchange(provider.as_ref()).await);
        }
        summaries
    }
}
