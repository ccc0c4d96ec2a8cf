//! Classification of the latest indicator readings.
//!
//! The signal engine and the suggestion formatter both read the frame through
//! these functions so crossover, RSI band and Bollinger definitions cannot
//! drift apart.

use crate::models::indicators::IndicatorRow;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Outcome of reading one indicator group at the evaluation point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading<T> {
    /// The group's columns are absent from the frame.
    Missing,
    /// Columns exist but a consulted cell is NaN or infinite.
    Unavailable,
    Value(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaCrossover {
    /// Short MA moved above the long MA on the latest bar.
    GoldenCross,
    /// Short MA stays above the long MA.
    Uptrend,
    /// Short MA moved to or below the long MA on the latest bar.
    DeathCross,
    /// Short MA stays below the long MA.
    Downtrend,
}

impl MaCrossover {
    /// `previous` and `latest` are `(short, long)` moving-average pairs.
    pub fn classify(previous: (f64, f64), latest: (f64, f64)) -> Self {
        let (prev_short, prev_long) = previous;
        let (short, long) = latest;
        if short > long {
            if prev_short <= prev_long {
                MaCrossover::GoldenCross
            } else {
                MaCrossover::Uptrend
            }
        } else if prev_short >= prev_long {
            MaCrossover::DeathCross
        } else {
            MaCrossover::Downtrend
        }
    }

    pub fn is_bullish(self) -> bool {
        matches!(self, MaCrossover::GoldenCross | MaCrossover::Uptrend)
    }

    pub fn is_cross(self) -> bool {
        matches!(self, MaCrossover::GoldenCross | MaCrossover::DeathCross)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiZone {
    Oversold,
    Neutral,
    Overbought,
}

impl RsiZone {
    pub fn classify(rsi: f64) -> Self {
        if rsi < RSI_OVERSOLD {
            RsiZone::Oversold
        } else if rsi > RSI_OVERBOUGHT {
            RsiZone::Overbought
        } else {
            RsiZone::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPosition {
    BelowLower,
    Inside,
    AboveUpper,
}

impl BandPosition {
    pub fn classify(close: f64, lower: f64, upper: f64) -> Self {
        if close < lower {
            BandPosition::BelowLower
        } else if close > upper {
            BandPosition::AboveUpper
        } else {
            BandPosition::Inside
        }
    }
}

pub fn read_crossover(previous: &IndicatorRow, latest: &IndicatorRow) -> Reading<MaCrossover> {
    let columns = (
        previous.sma_short,
        previous.sma_long,
        latest.sma_short,
        latest.sma_long,
    );
    let (Some(prev_short), Some(prev_long), Some(short), Some(long)) = columns else {
        return Reading::Missing;
    };
    if [prev_short, prev_long, short, long]
        .iter()
        .all(|v| v.is_finite())
    {
        Reading::Value(MaCrossover::classify((prev_short, prev_long), (short, long)))
    } else {
        Reading::Unavailable
    }
}

/// RSI zone together with the raw value it was derived from.
pub fn read_rsi(latest: &IndicatorRow) -> Reading<(RsiZone, f64)> {
    match latest.rsi {
        None => Reading::Missing,
        Some(rsi) if rsi.is_finite() => Reading::Value((RsiZone::classify(rsi), rsi)),
        Some(_) => Reading::Unavailable,
    }
}

pub fn read_bands(latest: &IndicatorRow) -> Reading<BandPosition> {
    let (Some(lower), Some(upper)) = (latest.bb_lower, latest.bb_upper) else {
        return Reading::Missing;
    };
    if [latest.close, lower, upper].iter().all(|v| v.is_finite()) {
        Reading::Value(BandPosition::classify(latest.close, lower, upper))
    } else {
        Reading::Unavailable
    }
}
