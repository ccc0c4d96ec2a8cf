//! Technical indicators computed over a price series.

pub mod error;
pub mod frame;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use error::IndicatorError;
pub use frame::*;
