use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Build a bar from an exchange row `[timestamp_ms, open, high, low, close, volume]`.
    pub fn from_row(row: [f64; 6]) -> Option<Self> {
        let timestamp = Utc.timestamp_millis_opt(row[0] as i64).single()?;
        Some(Self::new(row[1], row[2], row[3], row[4], row[5], timestamp))
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    /// Prices finite and positive, volume finite and non-negative.
    pub fn is_valid(&self) -> bool {
        let prices = [self.open, self.high, self.low, self.close];
        prices.iter().all(|p| p.is_finite() && *p > 0.0)
            && self.volume.is_finite()
            && self.volume >= 0.0
    }
}

/// Bars ordered by timestamp with no duplicate timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Normalize raw bars: drop invalid bars, sort by timestamp and keep the
    /// first bar seen for each timestamp.
    pub fn from_bars(bars: Vec<PriceBar>) -> Self {
        let mut bars: Vec<PriceBar> = bars.into_iter().filter(PriceBar::is_valid).collect();
        // stable sort keeps arrival order among equal timestamps
        bars.sort_by_key(|b| b.timestamp);
        bars.dedup_by_key(|b| b.timestamp);
        Self { bars }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }
}

/// Market listing as reported by an exchange catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInfo {
    pub symbol: String,
    pub base: String,
    pub quote: String,
    #[serde(default)]
    pub spot: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Per-exchange comparison row used by the reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeSummary {
    pub name: String,
    pub total_spot_pairs: usize,
    pub usdt_quoted_pairs: usize,
    pub supports_ohlcv: bool,
    pub rate_limit_ms: u64,
}

impl ExchangeSummary {
    pub fn new(name: impl Into<String>, rate_limit_ms: u64) -> Self {
        Self {
            name: name.into(),
            total_spot_pairs: 0,
            usdt_quoted_pairs: 0,
            supports_ohlcv: false,
            rate_limit_ms,
        }
    }
}
