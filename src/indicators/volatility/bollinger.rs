//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::BollingerColumns;

pub const DEFAULT_BB_PERIOD: usize = 20;
pub const DEFAULT_BB_STD_DEV: f64 = 2.0;

/// Calculate Bollinger Bands aligned with `closes`
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
pub fn calculate_bollinger_bands(closes: &[f64], period: usize, std_dev: f64) -> BollingerColumns {
    let middle = math::rolling_mean(closes, period);
    let std = math::rolling_std(closes, period);

    let upper = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| m + std_dev * s)
        .collect();
    let lower = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| m - std_dev * s)
        .collect();

    BollingerColumns {
        lower,
        middle,
        upper,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(closes: &[f64]) -> BollingerColumns {
    calculate_bollinger_bands(closes, DEFAULT_BB_PERIOD, DEFAULT_BB_STD_DEV)
}
