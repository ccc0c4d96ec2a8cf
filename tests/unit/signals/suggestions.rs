//! Unit tests for the suggestion formatter

use coinlens::models::indicators::IndicatorFrame;
use coinlens::signals::suggestions::{generate_suggestions, trend_label};

use crate::test_utils::{frame_from_rows, frame_with_groups, two_rows, Groups, Row};

#[test]
fn test_not_enough_data() {
    assert_eq!(
        generate_suggestions(&IndicatorFrame::empty()),
        vec!["Not enough data for analysis".to_string()]
    );
    assert_eq!(
        generate_suggestions(&frame_from_rows(&[Row::neutral_uptrend()])),
        vec!["Not enough data for analysis".to_string()]
    );
}

#[test]
fn test_golden_cross_replaces_trend_statement() {
    let frame = two_rows((98.0, 100.0), Row::neutral_uptrend().with_rsi(25.0));
    let suggestions = generate_suggestions(&frame);

    assert_eq!(suggestions.len(), 2);
    assert!(suggestions[0].starts_with("BULLISH SIGNAL: A 'Golden Cross' occurred recently."));
    assert!(suggestions[1].starts_with("MOMENTUM OPPORTUNITY: The asset is oversold (RSI = 25.00)."));
    assert!(suggestions.iter().all(|s| !s.starts_with("CURRENT TREND")));
}

#[test]
fn test_death_cross() {
    let latest = Row::neutral_uptrend().with_ma(99.0, 100.0).with_rsi(75.5);
    let suggestions = generate_suggestions(&two_rows((101.0, 100.0), latest));

    assert_eq!(suggestions.len(), 2);
    assert!(suggestions[0].starts_with("BEARISH SIGNAL: A 'Death Cross' occurred recently."));
    assert!(suggestions[1].starts_with("MOMENTUM WARNING: The asset is overbought (RSI = 75.50)."));
}

#[test]
fn test_downtrend_statement() {
    let latest = Row::neutral_uptrend().with_ma(90.0, 100.0);
    let suggestions = generate_suggestions(&two_rows((91.0, 100.0), latest));
    assert_eq!(
        suggestions[0],
        "CURRENT TREND: The asset is in a long-term downtrend, \
         as the short-term moving average is below the long-term average."
    );
}

#[test]
fn test_trend_without_cross() {
    let suggestions = generate_suggestions(&two_rows((102.0, 100.0), Row::neutral_uptrend()));
    assert_eq!(suggestions.len(), 2);
    assert!(suggestions[0].starts_with("CURRENT TREND"));
    assert_eq!(
        suggestions[1],
        "MOMENTUM: The RSI is neutral (RSI = 50.00), not indicating extreme conditions."
    );
}

#[test]
fn test_missing_groups_are_left_out() {
    let latest = Row::neutral_uptrend();
    let frame = frame_with_groups(
        &[latest, latest],
        Groups {
            moving_averages: false,
            ..Groups::ALL
        },
    );
    let suggestions = generate_suggestions(&frame);
    assert_eq!(suggestions.len(), 1);
    assert!(suggestions[0].starts_with("MOMENTUM:"));

    let nan_rsi = Row::neutral_uptrend().with_rsi(f64::NAN);
    let suggestions = generate_suggestions(&two_rows((102.0, 100.0), nan_rsi));
    assert_eq!(suggestions.len(), 1);
    assert!(suggestions[0].starts_with("CURRENT TREND"));
}

#[test]
fn test_trend_label() {
    assert_eq!(trend_label(&two_rows((102.0, 100.0), Row::neutral_uptrend())), "Bullish trend");
    let down = Row::neutral_uptrend().with_ma(90.0, 100.0);
    assert_eq!(trend_label(&two_rows((101.0, 100.0), down)), "Bearish trend");
    assert_eq!(trend_label(&IndicatorFrame::empty()), "N/A");
}
