//! Pure per-symbol analysis: indicators, signal and narrative.

use crate::indicators::{compute, IndicatorError};
use crate::models::indicators::IndicatorFrame;
use crate::models::market::PriceSeries;
use crate::models::signal::Signal;
use crate::signals::engine::SignalEngine;
use crate::signals::suggestions::generate_suggestions;

/// Result of running the indicator calculator, signal engine and suggestion
/// formatter over one price series.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub frame: IndicatorFrame,
    pub signal: Signal,
    pub suggestions: Vec<String>,
}

/// Run the full core over `series`. Only invalid windows are an error; short
/// or empty input yields an insufficient-data signal.
pub fn analyze(
    series: &PriceSeries,
    short_window: usize,
    long_window: usize,
) -> Result<Analysis, IndicatorError> {
    let frame = compute(series, short_window, long_window)?;
    let signal = SignalEngine::determine_signal(&frame);
    let suggestions = generate_suggestions(&frame);
    Ok(Analysis {
        frame,
        signal,
        suggestions,
    })
}
