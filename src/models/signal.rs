use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when reasons are rendered as one line.
pub const REASON_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalDirection::Buy => "BUY",
            SignalDirection::Sell => "SELL",
            SignalDirection::Hold => "HOLD",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::Low => "LOW",
            Confidence::Medium => "MEDIUM",
            Confidence::High => "HIGH",
        };
        f.write_str(s)
    }
}

/// Trading recommendation derived from one indicator frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub signal: SignalDirection,
    pub confidence: Confidence,
    pub score: i32,
    pub reasoning: Vec<String>,
    pub rsi: f64,
    pub price: f64,
}

impl Signal {
    pub const DEFAULT_RSI: f64 = 50.0;
    pub const DEFAULT_PRICE: f64 = 0.0;

    pub fn insufficient_data() -> Self {
        Self {
            signal: SignalDirection::Hold,
            confidence: Confidence::Low,
            score: 0,
            reasoning: vec!["Insufficient data for analysis".to_string()],
            rsi: Self::DEFAULT_RSI,
            price: Self::DEFAULT_PRICE,
        }
    }

    /// Reasons joined for display, or "No clear signals" when none fired.
    pub fn reasoning_text(&self) -> String {
        if self.reasoning.is_empty() {
            "No clear signals".to_string()
        } else {
            self.reasoning.join(REASON_SEPARATOR)
        }
    }
}
