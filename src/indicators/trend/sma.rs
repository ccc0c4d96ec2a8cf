//! SMA (Simple Moving Average) indicator

use crate::common::math;

pub const DEFAULT_SHORT_WINDOW: usize = 50;
pub const DEFAULT_LONG_WINDOW: usize = 200;

/// SMA of `closes` over `period` bars, aligned with the input (NaN during warm-up).
pub fn calculate_sma(closes: &[f64], period: usize) -> Vec<f64> {
    math::rolling_mean(closes, period)
}
