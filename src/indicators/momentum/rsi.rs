//! RSI (Relative Strength Index) indicator

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Wilder-smoothed RSI aligned with `closes`.
///
/// RSI = 100 - (100 / (1 + RS)), RS = average gain / average loss.
/// The first average is the plain mean of the first `period` deltas; later
/// averages use `(prev * (period - 1) + current) / period`. The first defined
/// value sits at index `period`; earlier positions are NaN.
///
/// A zero average loss yields 100. A window with neither gains nor losses
/// has no defined RSI and yields NaN.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return out;
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            avg_gain += change;
        } else {
            avg_loss += change.abs();
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;
    out[period] = rsi_from_averages(avg_gain, avg_loss);

    let n = period as f64;
    for i in period + 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, change.abs())
        };
        avg_gain = (avg_gain * (n - 1.0) + gain) / n;
        avg_loss = (avg_loss * (n - 1.0) + loss) / n;
        out[i] = rsi_from_averages(avg_gain, avg_loss);
    }

    out
}

/// RSI with the default period (14).
pub fn calculate_rsi_default(closes: &[f64]) -> Vec<f64> {
    calculate_rsi(closes, DEFAULT_RSI_PERIOD)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return if avg_gain == 0.0 { f64::NAN } else { 100.0 };
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
