use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::indicators::IndicatorError;
use crate::models::market::PriceBar;

/// Short and long simple moving averages, aligned with the frame's bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovingAverageColumns {
    pub short_window: usize,
    pub long_window: usize,
    pub short: Vec<f64>,
    pub long: Vec<f64>,
}

/// Bollinger Band columns, aligned with the frame's bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BollingerColumns {
    pub lower: Vec<f64>,
    pub middle: Vec<f64>,
    pub upper: Vec<f64>,
}

/// Price bars plus derived indicator columns.
///
/// Each indicator group is optional so consumers branch on presence rather
/// than on lookups that silently fall back. Frames produced by
/// [`crate::indicators::compute`] carry every group with no NaN cells; frames
/// assembled by hand through [`IndicatorFrame::new`] may omit groups or hold
/// NaN values, and the signal layer treats both explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorFrame {
    bars: Vec<PriceBar>,
    moving_averages: Option<MovingAverageColumns>,
    rsi: Option<Vec<f64>>,
    bollinger: Option<BollingerColumns>,
}

/// Read view of one frame row. A `None` group means the column is absent
/// from the frame; a present value may still be NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRow {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    pub sma_short: Option<f64>,
    pub sma_long: Option<f64>,
    pub rsi: Option<f64>,
    pub bb_lower: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_upper: Option<f64>,
}

impl IndicatorFrame {
    pub fn new(
        bars: Vec<PriceBar>,
        moving_averages: Option<MovingAverageColumns>,
        rsi: Option<Vec<f64>>,
        bollinger: Option<BollingerColumns>,
    ) -> Result<Self, IndicatorError> {
        let rows = bars.len();
        let check = |column: &'static str, len: usize| {
            if len == rows {
                Ok(())
            } else {
                Err(IndicatorError::LengthMismatch {
                    column,
                    expected: rows,
                    actual: len,
                })
            }
        };

        if let Some(ma) = &moving_averages {
            check("SMA_short", ma.short.len())?;
            check("SMA_long", ma.long.len())?;
        }
        if let Some(rsi) = &rsi {
            check("RSI", rsi.len())?;
        }
        if let Some(bb) = &bollinger {
            check("BB_lower", bb.lower.len())?;
            check("BB_middle", bb.middle.len())?;
            check("BB_upper", bb.upper.len())?;
        }

        Ok(Self {
            bars,
            moving_averages,
            rsi,
            bollinger,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn moving_averages(&self) -> Option<&MovingAverageColumns> {
        self.moving_averages.as_ref()
    }

    pub fn rsi(&self) -> Option<&[f64]> {
        self.rsi.as_deref()
    }

    pub fn bollinger(&self) -> Option<&BollingerColumns> {
        self.bollinger.as_ref()
    }

    pub fn has_moving_averages(&self) -> bool {
        self.moving_averages.is_some()
    }

    pub fn has_rsi(&self) -> bool {
        self.rsi.is_some()
    }

    pub fn has_bollinger(&self) -> bool {
        self.bollinger.is_some()
    }

    pub fn row(&self, index: usize) -> Option<IndicatorRow> {
        let bar = self.bars.get(index)?;
        let ma = self.moving_averages.as_ref();
        let bb = self.bollinger.as_ref();
        Some(IndicatorRow {
            timestamp: bar.timestamp,
            close: bar.close,
            sma_short: ma.map(|m| m.short[index]),
            sma_long: ma.map(|m| m.long[index]),
            rsi: self.rsi.as_ref().map(|r| r[index]),
            bb_lower: bb.map(|b| b.lower[index]),
            bb_middle: bb.map(|b| b.middle[index]),
            bb_upper: bb.map(|b| b.upper[index]),
        })
    }

    /// The two most recent rows as `(previous, latest)`.
    pub fn last_two(&self) -> Option<(IndicatorRow, IndicatorRow)> {
        let len = self.len();
        if len < 2 {
            return None;
        }
        Some((self.row(len - 2)?, self.row(len - 1)?))
    }

    /// Keep only the most recent `count` rows, e.g. for chart windows.
    pub fn tail(&self, count: usize) -> Self {
        let start = self.len().saturating_sub(count);
        Self {
            bars: self.bars[start..].to_vec(),
            moving_averages: self.moving_averages.as_ref().map(|m| MovingAverageColumns {
                short_window: m.short_window,
                long_window: m.long_window,
                short: m.short[start..].to_vec(),
                long: m.long[start..].to_vec(),
            }),
            rsi: self.rsi.as_ref().map(|r| r[start..].to_vec()),
            bollinger: self.bollinger.as_ref().map(|b| BollingerColumns {
                lower: b.lower[start..].to_vec(),
                middle: b.middle[start..].to_vec(),
                upper: b.upper[start..].to_vec(),
            }),
        }
    }
}
