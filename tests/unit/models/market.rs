//! Unit tests for price series normalization

use chrono::{Duration, TimeZone, Utc};
use coinlens::models::market::{PriceBar, PriceSeries};

use crate::test_utils::bar_at;

#[test]
fn test_from_bars_sorts_by_timestamp() {
    let series = PriceSeries::from_bars(vec![bar_at(2, 102.0), bar_at(0, 100.0), bar_at(1, 101.0)]);
    assert_eq!(series.closes(), vec![100.0, 101.0, 102.0]);
}

#[test]
fn test_from_bars_keeps_first_duplicate() {
    let series = PriceSeries::from_bars(vec![bar_at(0, 100.0), bar_at(1, 101.0), bar_at(1, 999.0)]);
    assert_eq!(series.len(), 2);
    assert_eq!(series.last().unwrap().close, 101.0);
}

#[test]
fn test_from_bars_drops_invalid_bars() {
    let mut negative = bar_at(1, 101.0);
    negative.low = -1.0;
    let mut nan_close = bar_at(2, 102.0);
    nan_close.close = f64::NAN;
    let mut bad_volume = bar_at(3, 103.0);
    bad_volume.volume = -5.0;

    let series = PriceSeries::from_bars(vec![bar_at(0, 100.0), negative, nan_close, bad_volume]);
    assert_eq!(series.closes(), vec![100.0]);
}

#[test]
fn test_from_row_parses_millisecond_timestamp() {
    let bar = PriceBar::from_row([1_704_067_200_000.0, 1.0, 2.0, 0.5, 1.5, 10.0]).unwrap();
    assert_eq!(bar.timestamp, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(bar.close, 1.5);
    assert_eq!(bar.timestamp_millis(), 1_704_067_200_000);
}

#[test]
fn test_empty_series() {
    let series = PriceSeries::from_bars(Vec::new());
    assert!(series.is_empty());
    assert!(series.last().is_none());
}

#[test]
fn test_zero_volume_is_valid() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let bar = PriceBar::new(1.0, 1.0, 1.0, 1.0, 0.0, start + Duration::hours(1));
    assert!(bar.is_valid());
}
