//! Rule weights and the score-to-signal table.

use crate::models::signal::{Confidence, SignalDirection};
use crate::signals::interpretation::{BandPosition, MaCrossover, RsiZone};

pub const CROSS_WEIGHT: i32 = 2;
pub const TREND_WEIGHT: i32 = 1;
pub const RSI_WEIGHT: i32 = 1;
pub const BAND_WEIGHT: i32 = 1;

pub fn crossover_delta(crossover: MaCrossover) -> i32 {
    match crossover {
        MaCrossover::GoldenCross => CROSS_WEIGHT,
        MaCrossover::Uptrend => TREND_WEIGHT,
        MaCrossover::DeathCross => -CROSS_WEIGHT,
        MaCrossover::Downtrend => -TREND_WEIGHT,
    }
}

pub fn rsi_delta(zone: RsiZone) -> i32 {
    match zone {
        RsiZone::Oversold => RSI_WEIGHT,
        RsiZone::Neutral => 0,
        RsiZone::Overbought => -RSI_WEIGHT,
    }
}

pub fn band_delta(position: BandPosition) -> i32 {
    match position {
        BandPosition::BelowLower => BAND_WEIGHT,
        BandPosition::Inside => 0,
        BandPosition::AboveUpper => -BAND_WEIGHT,
    }
}

/// Map a total score to a signal and its confidence.
///
/// | score | signal | confidence |
/// |---|---|---|
/// | >= 3 | BUY | HIGH |
/// | 2 | BUY | MEDIUM |
/// | -1, 1 | HOLD | MEDIUM |
/// | 0 | HOLD | LOW |
/// | -2 | SELL | MEDIUM |
/// | <= -3 | SELL | HIGH |
pub fn classify_score(score: i32) -> (SignalDirection, Confidence) {
    match score {
        s if s >= 3 => (SignalDirection::Buy, Confidence::High),
        2 => (SignalDirection::Buy, Confidence::Medium),
        s if s <= -3 => (SignalDirection::Sell, Confidence::High),
        -2 => (SignalDirection::Sell, Confidence::Medium),
        0 => (SignalDirection::Hold, Confidence::Low),
        _ => (SignalDirection::Hold, Confidence::Medium),
    }
}
