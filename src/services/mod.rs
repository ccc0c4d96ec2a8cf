//! Exchange-facing services: market data access, history fetch, market scan.

pub mod error;
pub mod fetcher;
pub mod market_data;
pub mod scanner;
pub mod snapshot;

pub use error::FetchError;
pub use fetcher::HistoryFetcher;
pub use market_data::MarketDataProvider;
pub use scanner::MarketScanner;
pub use snapshot::SnapshotExchange;
