//! Rolling-window statistics over price columns.
//!
//! Every function returns a vector aligned with its input. Positions without a
//! full trailing window hold `f64::NAN`.

/// Simple moving average over `window` trailing values.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    let mut sum: f64 = values[..window].iter().sum();
    out[window - 1] = sum / window as f64;
    for i in window..values.len() {
        sum += values[i] - values[i - window];
        out[i] = sum / window as f64;
    }
    out
}

/// Population standard deviation (divides by N) over `window` trailing values.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    for end in window..=values.len() {
        let slice = &values[end - window..end];
        out[end - 1] = standard_deviation(slice);
    }
    out
}

/// Population standard deviation of a slice; NaN when empty.
pub fn standard_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
