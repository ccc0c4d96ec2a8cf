//! Unit tests for rolling statistics

use coinlens::common::math::{rolling_mean, rolling_std, standard_deviation};

#[test]
fn test_rolling_mean_fills_warmup_with_nan() {
    let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 2);
    assert!(out[0].is_nan());
    assert_eq!(&out[1..], &[1.5, 2.5, 3.5]);
}

#[test]
fn test_rolling_mean_short_input_is_all_nan() {
    assert!(rolling_mean(&[1.0, 2.0], 3).iter().all(|v| v.is_nan()));
}

#[test]
fn test_standard_deviation_is_population() {
    let sd = standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    assert!((sd - 2.0).abs() < 1e-12);
}

#[test]
fn test_rolling_std_of_constant_is_zero() {
    let out = rolling_std(&[3.0; 5], 3);
    assert!(out[1].is_nan());
    assert_eq!(&out[2..], &[0.0, 0.0, 0.0]);
}
