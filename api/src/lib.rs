//! Data-access layer for the upstream market API.
//!
//! The rest of the workspace treats everything here as a set of opaque async
//! loaders: each operation is a plain HTTP GET returning a typed record.

pub mod error;
pub mod providers;
pub mod types;

pub use error::ApiError;
pub use providers::coin_paprika::CoinPaprika;
pub use providers::MarketDataProvider;
pub use types::CoinInfo;
pub use types::CoinListing;
pub use types::OhlcvRecord;
pub use types::Quotes;
pub use types::TickerData;
pub use types::UsdQuote;
