//! Rule-based signal engine.
//!
//! Scores the two most recent frame rows with three additive rules
//! (moving-average crossover, RSI band, Bollinger position) and maps the total
//! to a BUY/SELL/HOLD recommendation. Always returns a well-formed [`Signal`].

use crate::models::indicators::{IndicatorFrame, IndicatorRow};
use crate::models::signal::Signal;
use crate::signals::interpretation::{
    read_bands, read_crossover, read_rsi, BandPosition, MaCrossover, Reading, RsiZone,
};
use crate::signals::scoring::{band_delta, classify_score, crossover_delta, rsi_delta};

/// Rows needed to compare the latest bar against the previous one.
pub const MIN_ROWS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    MovingAverage,
    Rsi,
    Bollinger,
}

/// Contribution of one rule to a single evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub rule: RuleKind,
    pub delta: i32,
    pub reason: Option<String>,
}

impl RuleOutcome {
    fn new(rule: RuleKind, delta: i32, reason: impl Into<String>) -> Self {
        Self {
            rule,
            delta,
            reason: Some(reason.into()),
        }
    }

    fn silent(rule: RuleKind) -> Self {
        Self {
            rule,
            delta: 0,
            reason: None,
        }
    }
}

pub struct SignalEngine;

impl SignalEngine {
    /// Determine the trading signal for `frame`.
    ///
    /// Frames with fewer than [`MIN_ROWS`] rows short-circuit to
    /// [`Signal::insufficient_data`].
    pub fn determine_signal(frame: &IndicatorFrame) -> Signal {
        if frame.len() < MIN_ROWS {
            return Signal::insufficient_data();
        }
        let Some((previous, latest)) = frame.last_two() else {
            return Signal::insufficient_data();
        };

        let outcomes = Self::evaluate_rules(&previous, &latest);
        let score: i32 = outcomes.iter().map(|o| o.delta).sum();
        let (signal, confidence) = classify_score(score);
        let reasoning = outcomes.into_iter().filter_map(|o| o.reason).collect();

        let rsi = match read_rsi(&latest) {
            Reading::Value((_, value)) => value,
            _ => Signal::DEFAULT_RSI,
        };
        let price = if latest.close.is_finite() {
            latest.close
        } else {
            Signal::DEFAULT_PRICE
        };

        Signal {
            signal,
            confidence,
            score,
            reasoning,
            rsi,
            price,
        }
    }

    /// Evaluate every rule in order (MA, RSI, Bollinger). Exactly one outcome
    /// is returned per rule.
    pub fn evaluate_rules(previous: &IndicatorRow, latest: &IndicatorRow) -> Vec<RuleOutcome> {
        vec![
            Self::moving_average_rule(previous, latest),
            Self::rsi_rule(latest),
            Self::bollinger_rule(latest),
        ]
    }

    fn moving_average_rule(previous: &IndicatorRow, latest: &IndicatorRow) -> RuleOutcome {
        let rule = RuleKind::MovingAverage;
        match read_crossover(previous, latest) {
            Reading::Missing => RuleOutcome::new(rule, 0, "MA data columns missing"),
            Reading::Unavailable => RuleOutcome::new(rule, 0, "MA values unavailable"),
            Reading::Value(crossover) => {
                let reason = match crossover {
                    MaCrossover::GoldenCross => "Golden Cross detected (strong buy signal)",
                    MaCrossover::Uptrend => "Uptrend confirmed by moving averages",
                    MaCrossover::DeathCross => "Death Cross detected (strong sell signal)",
                    MaCrossover::Downtrend => "Downtrend confirmed by moving averages",
                };
                RuleOutcome::new(rule, crossover_delta(crossover), reason)
            }
        }
    }

    fn rsi_rule(latest: &IndicatorRow) -> RuleOutcome {
        let rule = RuleKind::Rsi;
        match read_rsi(latest) {
            Reading::Missing => RuleOutcome::new(rule, 0, "RSI data column missing"),
            Reading::Unavailable => RuleOutcome::new(rule, 0, "RSI value unavailable"),
            Reading::Value((zone, rsi)) => {
                let reason = match zone {
                    RsiZone::Oversold => format!("Oversold conditions (RSI: {rsi:.1})"),
                    RsiZone::Overbought => format!("Overbought conditions (RSI: {rsi:.1})"),
                    RsiZone::Neutral => format!("Neutral momentum (RSI: {rsi:.1})"),
                };
                RuleOutcome::new(rule, rsi_delta(zone), reason)
            }
        }
    }

    fn bollinger_rule(latest: &IndicatorRow) -> RuleOutcome {
        let rule = RuleKind::Bollinger;
        match read_bands(latest) {
            Reading::Missing => RuleOutcome::new(rule, 0, "Bollinger Band data columns missing"),
            Reading::Unavailable => RuleOutcome::new(rule, 0, "Bollinger Band values unavailable"),
            Reading::Value(position) => {
                let delta = band_delta(position);
                match position {
                    BandPosition::BelowLower => RuleOutcome::new(
                        rule,
                        delta,
                        "Price below lower Bollinger Band (potential reversal)",
                    ),
                    BandPosition::AboveUpper => RuleOutcome::new(
                        rule,
                        delta,
                        "Price above upper Bollinger Band (potential correction)",
                    ),
                    BandPosition::Inside => RuleOutcome::silent(rule),
                }
            }
        }
    }
}
