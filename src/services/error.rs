use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("exchange '{exchange}' does not support OHLCV history")]
    Unsupported { exchange: String },

    #[error("no {timeframe} candles for {symbol} on '{exchange}'")]
    UnknownSymbol {
        exchange: String,
        symbol: String,
        timeframe: String,
    },

    #[error("market data source error: {0}")]
    Source(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
