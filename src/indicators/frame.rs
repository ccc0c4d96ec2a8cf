//! Indicator frame assembly: every indicator column computed over one price
//! series, with rows lacking full history dropped.

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::calculate_rsi_default;
use crate::indicators::trend::calculate_sma;
use crate::indicators::volatility::calculate_bollinger_bands_default;
use crate::models::indicators::{BollingerColumns, IndicatorFrame, MovingAverageColumns};
use crate::models::market::PriceSeries;

/// Check a short/long moving-average window pair.
pub fn validate_windows(short_window: usize, long_window: usize) -> Result<(), IndicatorError> {
    if short_window == 0 {
        return Err(IndicatorError::ZeroWindow { name: "short" });
    }
    if long_window == 0 {
        return Err(IndicatorError::ZeroWindow { name: "long" });
    }
    if short_window >= long_window {
        return Err(IndicatorError::WindowOrder {
            short: short_window,
            long: long_window,
        });
    }
    Ok(())
}

/// Compute SMA short/long, RSI(14) and Bollinger(20, 2σ) over `series`.
///
/// Rows where any indicator is still undefined are dropped, so the result is
/// a suffix of the input with every cell populated. An input shorter than the
/// warm-up of the slowest indicator yields an empty frame.
pub fn compute(
    series: &PriceSeries,
    short_window: usize,
    long_window: usize,
) -> Result<IndicatorFrame, IndicatorError> {
    validate_windows(short_window, long_window)?;
    if series.len() < long_window {
        return Ok(IndicatorFrame::empty());
    }

    let closes = series.closes();
    let sma_short = calculate_sma(&closes, short_window);
    let sma_long = calculate_sma(&closes, long_window);
    let rsi = calculate_rsi_default(&closes);
    let bands = calculate_bollinger_bands_default(&closes);

    let complete: Vec<usize> = (0..closes.len())
        .filter(|&i| {
            [
                sma_short[i],
                sma_long[i],
                rsi[i],
                bands.lower[i],
                bands.middle[i],
                bands.upper[i],
            ]
            .iter()
            .all(|v| v.is_finite())
        })
        .collect();

    let pick = |column: &[f64]| complete.iter().map(|&i| column[i]).collect::<Vec<f64>>();
    let bars = complete.iter().map(|&i| series.bars()[i]).collect();

    IndicatorFrame::new(
        bars,
        Some(MovingAverageColumns {
            short_window,
            long_window,
            short: pick(&sma_short),
            long: pick(&sma_long),
        }),
        Some(pick(&rsi)),
        Some(BollingerColumns {
            lower: pick(&bands.lower),
            middle: pick(&bands.middle),
            upper: pick(&bands.upper),
        }),
    )
}
