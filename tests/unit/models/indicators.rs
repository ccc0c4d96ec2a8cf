//! Unit tests for the indicator frame schema

use coinlens::indicators::IndicatorError;
use coinlens::models::indicators::IndicatorFrame;

use crate::test_utils::{bar_at, frame_from_rows, frame_with_groups, Groups, Row};

#[test]
fn test_new_rejects_misaligned_columns() {
    let bars = vec![bar_at(0, 100.0), bar_at(1, 101.0)];
    let result = IndicatorFrame::new(bars, None, Some(vec![50.0]), None);
    assert_eq!(
        result.unwrap_err(),
        IndicatorError::LengthMismatch {
            column: "RSI",
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn test_row_reports_absent_groups_as_none() {
    let frame = frame_with_groups(
        &[Row::neutral_uptrend()],
        Groups {
            moving_averages: false,
            rsi: true,
            bollinger: false,
        },
    );
    let row = frame.row(0).unwrap();
    assert_eq!(row.sma_short, None);
    assert_eq!(row.bb_upper, None);
    assert_eq!(row.rsi, Some(50.0));
    assert!(!frame.has_moving_averages());
    assert!(frame.has_rsi());
}

#[test]
fn test_last_two_needs_two_rows() {
    let frame = frame_from_rows(&[Row::neutral_uptrend()]);
    assert!(frame.last_two().is_none());
    assert!(IndicatorFrame::empty().last_two().is_none());
}

#[test]
fn test_last_two_order() {
    let rows = [
        Row::neutral_uptrend().with_close(1.0),
        Row::neutral_uptrend().with_close(2.0),
        Row::neutral_uptrend().with_close(3.0),
    ];
    let (previous, latest) = frame_from_rows(&rows).last_two().unwrap();
    assert_eq!(previous.close, 2.0);
    assert_eq!(latest.close, 3.0);
}

#[test]
fn test_tail_keeps_columns_aligned() {
    let rows: Vec<Row> = (0..10)
        .map(|i| Row::neutral_uptrend().with_close(100.0 + i as f64).with_rsi(40.0 + i as f64))
        .collect();
    let tail = frame_from_rows(&rows).tail(3);
    assert_eq!(tail.len(), 3);
    assert_eq!(tail.bars()[0].close, 107.0);
    assert_eq!(tail.rsi().unwrap(), &[47.0, 48.0, 49.0]);

    let longer = frame_from_rows(&rows).tail(50);
    assert_eq!(longer.len(), 10);
}
