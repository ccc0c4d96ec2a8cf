//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod signal;

pub use indicators::{BollingerColumns, IndicatorFrame, IndicatorRow, MovingAverageColumns};
pub use market::{ExchangeSummary, MarketInfo, PriceBar, PriceSeries};
pub use signal::{Confidence, Signal, SignalDirection};
