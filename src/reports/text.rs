//! Plain-text narrative report.

use std::fmt::{self, Write as _};
use std::path::PathBuf;

use async_trait::async_trait;

use crate::models::market::ExchangeSummary;
use crate::reports::error::ReportError;
use crate::reports::publisher::{write_report, ReportSink};
use crate::reports::AnalysisReport;

pub struct TextReportSink {
    output_dir: PathBuf,
}

impl TextReportSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl ReportSink for TextReportSink {
    fn name(&self) -> &'static str {
        "text"
    }

    async fn publish(&self, report: &AnalysisReport) -> Result<PathBuf, ReportError> {
        let path = self.output_dir.join(report.file_name("txt"));
        let body = render_text(report)?;
        write_report(&path, body.as_bytes()).await?;
        Ok(path)
    }
}

/// Render the report as a standalone text document.
pub fn render_text(report: &AnalysisReport) -> Result<String, fmt::Error> {
    let signal = &report.signal;
    let mut out = String::new();

    writeln!(
        out,
        "--- Automated Technical Analysis Report for {} ---",
        report.symbol
    )?;
    writeln!(
        out,
        "Generated: {} ({} candles)",
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
        report.timeframe
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Signal: {} (Confidence: {}, Score: {:+})",
        signal.signal, signal.confidence, signal.score
    )?;
    writeln!(out, "Price: {:.2}", signal.price)?;
    writeln!(out, "RSI: {:.2}", signal.rsi)?;
    writeln!(out, "Trend: {}", report.trend)?;
    writeln!(out, "Reasoning: {}", signal.reasoning_text())?;
    writeln!(out)?;

    if report.suggestions.is_empty() {
        writeln!(
            out,
            "No specific signals were generated based on the current ruleset."
        )?;
    } else {
        for suggestion in &report.suggestions {
            writeln!(out, "- {suggestion}")?;
        }
    }
    writeln!(out)?;

    out.push_str(&render_exchange_table(&report.exchanges)?);
    writeln!(out, "--- End of Report ---")?;
    Ok(out)
}

/// Exchange comparison table, or a notice when no exchange was scanned.
pub fn render_exchange_table(exchanges: &[ExchangeSummary]) -> Result<String, fmt::Error> {
    if exchanges.is_empty() {
        return Ok("No exchange data available.\n".to_string());
    }

    let name_width = exchanges
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(0)
        .max("Exchange".len());

    let mut out = String::new();
    writeln!(
        out,
        "{:<name_width$}  {:>11}  {:>10}  {:>9}  {:>13}",
        "Exchange", "Total Pairs", "USDT Pairs", "Has OHLCV", "Rate Limit ms"
    )?;
    for e in exchanges {
        writeln!(
            out,
            "{:<name_width$}  {:>11}  {:>10}  {:>9}  {:>13}",
            e.name,
            e.total_spot_pairs,
            e.usdt_quoted_pairs,
            if e.supports_ohlcv { "yes" } else { "no" },
            e.rate_limit_ms
        )?;
    }
    Ok(out)
}
