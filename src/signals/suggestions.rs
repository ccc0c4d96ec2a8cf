//! Human-readable narrative for reports.

use crate::models::indicators::IndicatorFrame;
use crate::signals::engine::MIN_ROWS;
use crate::signals::interpretation::{read_crossover, read_rsi, MaCrossover, Reading, RsiZone};

/// Prose bullets for the latest rows: a crossover notice when one just
/// happened or the current trend otherwise, then RSI momentum.
/// Groups that are missing or NaN at the latest rows are left out.
pub fn generate_suggestions(frame: &IndicatorFrame) -> Vec<String> {
    if frame.len() < MIN_ROWS {
        return vec!["Not enough data for analysis".to_string()];
    }
    let Some((previous, latest)) = frame.last_two() else {
        return vec!["Not enough data for analysis".to_string()];
    };

    let mut suggestions = Vec::new();

    if let Reading::Value(crossover) = read_crossover(&previous, &latest) {
        let text = match crossover {
            MaCrossover::GoldenCross => {
                "BULLISH SIGNAL: A 'Golden Cross' occurred recently. \
                 The short-term moving average crossed above the long-term average, \
                 suggesting a potential shift to an uptrend."
            }
            MaCrossover::Uptrend => {
                "CURRENT TREND: The asset is in a long-term uptrend, \
                 as the short-term moving average is above the long-term average."
            }
            MaCrossover::DeathCross => {
                "BEARISH SIGNAL: A 'Death Cross' occurred recently. \
                 The short-term moving average crossed below the long-term average, \
                 suggesting a potential shift to a downtrend."
            }
            MaCrossover::Downtrend => {
                "CURRENT TREND: The asset is in a long-term downtrend, \
                 as the short-term moving average is below the long-term average."
            }
        };
        suggestions.push(text.to_string());
    }

    if let Reading::Value((zone, rsi)) = read_rsi(&latest) {
        let text = match zone {
            RsiZone::Overbought => format!(
                "MOMENTUM WARNING: The asset is overbought (RSI = {rsi:.2}). \
                 Recent upward movement may be losing momentum and could pull back."
            ),
            RsiZone::Oversold => format!(
                "MOMENTUM OPPORTUNITY: The asset is oversold (RSI = {rsi:.2}). \
                 Recent downward movement may be exhausted, presenting a rebound opportunity."
            ),
            RsiZone::Neutral => format!(
                "MOMENTUM: The RSI is neutral (RSI = {rsi:.2}), \
                 not indicating extreme conditions."
            ),
        };
        suggestions.push(text);
    }

    suggestions
}

/// Short trend label for report headers: "Bullish trend", "Bearish trend" or "N/A".
pub fn trend_label(frame: &IndicatorFrame) -> &'static str {
    let Some((previous, latest)) = frame.last_two() else {
        return "N/A";
    };
    match read_crossover(&previous, &latest) {
        Reading::Value(crossover) if crossover.is_bullish() => "Bullish trend",
        Reading::Value(_) => "Bearish trend",
        _ => "N/A",
    }
}
