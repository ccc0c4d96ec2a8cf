//! Report output: the analysis record handed to renderers and the sinks that
//! write it.

pub mod error;
pub mod json;
pub mod publisher;
pub mod text;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::indicators::IndicatorFrame;
use crate::models::market::ExchangeSummary;
use crate::models::signal::Signal;
use crate::signals::suggestions::trend_label;

pub use error::ReportError;
pub use json::JsonReportSink;
pub use publisher::{PublishSummary, ReportPublisher, ReportSink};
pub use text::TextReportSink;

/// Rows of indicator history carried into reports (about one year of daily bars).
pub const CHART_WINDOW: usize = 365;

/// Everything a renderer needs for one symbol.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub timeframe: String,
    pub generated_at: DateTime<Utc>,
    pub signal: Signal,
    pub trend: String,
    pub suggestions: Vec<String>,
    pub exchanges: Vec<ExchangeSummary>,
    pub history: IndicatorFrame,
}

impl AnalysisReport {
    pub fn new(
        symbol: impl Into<String>,
        timeframe: impl Into<String>,
        signal: Signal,
        suggestions: Vec<String>,
        exchanges: Vec<ExchangeSummary>,
        frame: &IndicatorFrame,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe: timeframe.into(),
            generated_at: Utc::now(),
            signal,
            trend: trend_label(frame).to_string(),
            suggestions,
            exchanges,
            history: frame.tail(CHART_WINDOW),
        }
    }

    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// `<YYYY-MM-DD>_<SYMBOL>_analysis.<extension>` with `/` in the symbol
    /// replaced by `-`.
    pub fn file_name(&self, extension: &str) -> String {
        format!(
            "{}_{}_analysis.{}",
            self.generated_at.format("%Y-%m-%d"),
            self.symbol.replace('/', "-"),
            extension
        )
    }
}
