//! End-to-end analysis run: scan exchanges, fetch history, analyze each
//! symbol and publish reports.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::config::AnalysisConfig;
use crate::core::pipeline::{analyze, Analysis};
use crate::indicators::IndicatorError;
use crate::models::market::{ExchangeSummary, PriceSeries};
use crate::models::signal::Signal;
use crate::reports::{AnalysisReport, JsonReportSink, ReportPublisher, TextReportSink};
use crate::services::error::FetchError;
use crate::services::fetcher::HistoryFetcher;
use crate::services::market_data::MarketDataProvider;
use crate::services::scanner::MarketScanner;
use crate::services::snapshot::SnapshotExchange;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("no exchanges could be initialized")]
    NoExchanges,

    #[error("no price data for {symbol}")]
    NoData { symbol: String },

    #[error("only {written} of {required} required reports written for {symbol}")]
    TooFewReports {
        symbol: String,
        written: usize,
        required: usize,
    },

    #[error("no symbol could be analyzed")]
    NothingAnalyzed,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error("analysis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Successful analysis of one symbol.
#[derive(Debug)]
pub struct SymbolReport {
    pub symbol: String,
    pub signal: Signal,
    pub suggestions: Vec<String>,
    pub reports: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub exchanges: Vec<ExchangeSummary>,
    pub reports: Vec<SymbolReport>,
    pub failures: Vec<(String, AnalyzerError)>,
}

pub struct Analyzer {
    config: AnalysisConfig,
    exchanges: Vec<Arc<dyn MarketDataProvider>>,
    publisher: ReportPublisher,
}

impl Analyzer {
    /// `exchanges` are scanned in order; the first one supplies price history.
    pub fn new(
        config: AnalysisConfig,
        exchanges: Vec<Arc<dyn MarketDataProvider>>,
        publisher: ReportPublisher,
    ) -> Self {
        Self {
            config,
            exchanges,
            publisher,
        }
    }

    /// Analyzer over the configured snapshot exchanges, writing JSON and text
    /// reports under the configured reports directory.
    pub async fn from_config(config: AnalysisConfig) -> Self {
        let exchanges = load_snapshot_exchanges(&config).await;
        let reports_dir = config.reports_dir();
        let publisher = ReportPublisher::new()
            .with_sink(JsonReportSink::new(&reports_dir))
            .with_sink(TextReportSink::new(&reports_dir));
        Self::new(config, exchanges, publisher)
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Reports that must succeed per symbol: the configured minimum, or all
    /// sinks but one (at least one).
    pub fn required_reports(&self) -> usize {
        self.config
            .min_reports
            .unwrap_or_else(|| self.publisher.sink_count().saturating_sub(1).max(1))
    }

    pub async fn run(&self) -> Result<RunSummary, AnalyzerError> {
        info!("Starting cryptocurrency market analysis");

        let Some(primary) = self.exchanges.first().cloned() else {
            error!("No exchanges initialized");
            return Err(AnalyzerError::NoExchanges);
        };

        let exchanges = MarketScanner::scan_all(&self.exchanges).await;
        for summary in &exchanges {
            info!(
                exchange = %summary.name,
                spot_pairs = summary.total_spot_pairs,
                usdt_pairs = summary.usdt_quoted_pairs,
                supports_ohlcv = summary.supports_ohlcv,
                rate_limit_ms = summary.rate_limit_ms,
                "Exchange scanned"
            );
        }

        let analyses = self.analyze_symbols(primary).await;

        let mut summary = RunSummary {
            exchanges,
            ..RunSummary::default()
        };
        for (symbol, outcome) in analyses {
            let result = match outcome {
                Ok(analysis) => self.publish(&symbol, analysis, &summary.exchanges).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(report) => summary.reports.push(report),
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Symbol analysis failed");
                    summary.failures.push((symbol, e));
                }
            }
        }

        if summary.reports.is_empty() {
            return Err(AnalyzerError::NothingAnalyzed);
        }

        for report in &summary.reports {
            info!(
                symbol = %report.symbol,
                signal = %report.signal.signal,
                confidence = %report.signal.confidence,
                score = report.signal.score,
                "Analysis complete"
            );
        }
        Ok(summary)
    }

    /// Fetch and analyze every configured symbol concurrently. Results come
    /// back in configuration order; a symbol whose task panics is reported as
    /// a failed symbol.
    async fn analyze_symbols(
        &self,
        provider: Arc<dyn MarketDataProvider>,
    ) -> Vec<(String, Result<Analysis, AnalyzerError>)> {
        let mut tasks = JoinSet::new();
        for (index, symbol) in self.config.symbols.iter().enumerate() {
            let provider = provider.clone();
            let task_symbol = symbol.clone();
            let timeframe = self.config.timeframe.clone();
            let days = self.config.history_days;
            let (short, long) = (self.config.short_window, self.config.long_window);

            let analysis = tokio::spawn(async move {
                fetch_and_analyze(provider.as_ref(), &task_symbol, &timeframe, days, short, long)
                    .await
            });
            let symbol = symbol.clone();
            tasks.spawn(async move {
                let outcome = match analysis.await {
                    Ok(outcome) => outcome,
                    Err(e) => Err(AnalyzerError::Task(e)),
                };
                (index, symbol, outcome)
            });
        }

        let mut results = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => error!(error = %e, "Symbol task did not complete"),
            }
        }
        results.sort_by_key(|(index, _, _)| *index);
        results
            .into_iter()
            .map(|(_, symbol, outcome)| (symbol, outcome))
            .collect()
    }

    async fn publish(
        &self,
        symbol: &str,
        analysis: Analysis,
        exchanges: &[ExchangeSummary],
    ) -> Result<SymbolReport, AnalyzerError> {
        let report = AnalysisReport::new(
            symbol,
            &self.config.timeframe,
            analysis.signal.clone(),
            analysis.suggestions.clone(),
            exchanges.to_vec(),
            &analysis.frame,
        );

        let published = self.publisher.publish(&report).await;
        let required = self.required_reports();
        if published.succeeded() < required {
            return Err(AnalyzerError::TooFewReports {
                symbol: symbol.to_string(),
                written: published.succeeded(),
                required,
            });
        }

        Ok(SymbolReport {
            symbol: symbol.to_string(),
            signal: analysis.signal,
            suggestions: analysis.suggestions,
            reports: published.written,
        })
    }
}

async fn fetch_and_analyze(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    timeframe: &str,
    days: i64,
    short_window: usize,
    long_window: usize,
) -> Result<Analysis, AnalyzerError> {
    let series = HistoryFetcher::new(provider)
        .fetch(symbol, timeframe, days)
        .await?;
    analyze_symbol(symbol, &series, short_window, long_window)
}

fn analyze_symbol(
    symbol: &str,
    series: &PriceSeries,
    short_window: usize,
    long_window: usize,
) -> Result<Analysis, AnalyzerError> {
    if series.is_empty() {
        return Err(AnalyzerError::NoData {
            symbol: symbol.to_string(),
        });
    }
    let analysis = analyze(series, short_window, long_window)?;
    info!(
        symbol,
        candles = series.len(),
        rows = analysis.frame.len(),
        "Calculated indicators"
    );
    Ok(analysis)
}

/// Load `<snapshot_dir>/<exchange>.json` for every configured exchange,
/// skipping those that cannot be loaded.
pub async fn load_snapshot_exchanges(config: &AnalysisConfig) -> Vec<Arc<dyn MarketDataProvider>> {
    info!(count = config.exchanges.len(), "Initializing exchanges");
    let mut exchanges: Vec<Arc<dyn MarketDataProvider>> = Vec::new();
    for id in &config.exchanges {
        let path = config.snapshot_dir.join(format!("{id}.json"));
        match SnapshotExchange::load(&path).await {
            Ok(exchange) => {
                info!(exchange = %id, "Initialized exchange");
                exchanges.push(Arc::new(exchange));
            }
            Err(e) => {
                warn!(exchange = %id, path = %path.display(), error = %e, "Failed to initialize exchange, skipping");
            }
        }
    }
    exchanges
}
