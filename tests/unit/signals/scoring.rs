//! Unit tests for score classification

use coinlens::models::signal::{Confidence, SignalDirection};
use coinlens::signals::scoring::classify_score;

#[test]
fn test_buy_thresholds() {
    assert_eq!(classify_score(2), (SignalDirection::Buy, Confidence::Medium));
    for score in 3..=6 {
        assert_eq!(classify_score(score), (SignalDirection::Buy, Confidence::High));
    }
}

#[test]
fn test_sell_thresholds() {
    assert_eq!(classify_score(-2), (SignalDirection::Sell, Confidence::Medium));
    for score in -6..=-3 {
        assert_eq!(classify_score(score), (SignalDirection::Sell, Confidence::High));
    }
}

#[test]
fn test_hold_band() {
    assert_eq!(classify_score(0), (SignalDirection::Hold, Confidence::Low));
    assert_eq!(classify_score(1), (SignalDirection::Hold, Confidence::Medium));
    assert_eq!(classify_score(-1), (SignalDirection::Hold, Confidence::Medium));
}
