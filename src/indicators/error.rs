use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("{name} window must be positive")]
    ZeroWindow { name: &'static str },

    #[error("short window ({short}) must be less than long window ({long})")]
    WindowOrder { short: usize, long: usize },

    #[error("column {column} has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },
}
