//! Traits and implementations for external market-data providers.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::CoinInfo;
use crate::types::CoinListing;
use crate::types::OhlcvRecord;
use crate::types::TickerData;

/// A service that can answer the four market-data questions the UI asks.
pub trait MarketDataProvider {
    /// Fetches the global coin listing, rank-ordered.
    async fn coin_listings(&self) -> Result<Vec<CoinListing>, ApiError>;

    /// Fetches static metadata for one coin.
    async fn coin_info(&self, id: &str) -> Result<CoinInfo, ApiError>;

    /// Fetches the live ticker snapshot for one coin.
    async fn coin_tickers(&self, id: &str) -> Result<TickerData, ApiError>;

    /// Fetches daily OHLCV history for one coin.
    async fn coin_history(&self, id: &str) -> Result<Vec<OhlcvRecord>, ApiError>;
}

/// Provides market data from the public CoinPaprika API.
pub mod coin_paprika {
    use super::*;

    const BASE_URL: &str = "https://api.coinpaprika.com/v1";

    // CoinPaprika gates historical OHLCV ranges behind paid plans; daily
    // candles come from the public mirror instead.
    const HISTORY_URL: &str = "https://ohlcv-api.nomadcoders.workers.dev";

    /// An implementation of [`MarketDataProvider`] for CoinPaprika.
    #[derive(Clone, Debug)]
    pub struct CoinPaprika {
        client: reqwest::Client,
    }

    impl Default for CoinPaprika {
        fn default() -> Self {
            Self {
                client: reqwest::Client::new(),
            }
        }
    }

    impl CoinPaprika {
        pub fn new() -> Self {
            Self::default()
        }

        /// GET `url`, map 404 to [`ApiError::NotFound`] for `id`, and decode
        /// the body as `T`.
        async fn get_json<T: DeserializeOwned>(&self, url: &str, id: &str) -> Result<T, ApiError> {
            let resp = self
                .client
                .get(url)
                .send()
                .await
                .map_err(ApiError::network)?;

            let status = resp.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(ApiError::NotFound(id.to_string()));
            }
            if !status.is_success() {
                return Err(ApiError::Status(status.as_u16()));
            }

            let body = resp.bytes().await.map_err(ApiError::network)?;
            serde_json::from_slice(&body).map_err(ApiError::decode)
        }
    }

    impl MarketDataProvider for CoinPaprika {
        async fn coin_listings(&self) -> Result<Vec<CoinListing>, ApiError> {
            self.get_json(&format!("{BASE_URL}/coins"), "").await
        }

        async fn coin_info(&self, id: &str) -> Result<CoinInfo, ApiError> {
            self.get_json(&format!("{BASE_URL}/coins/{id}"), id).await
        }

        async fn coin_tickers(&self, id: &str) -> Result<TickerData, ApiError> {
            self.get_json(&format!("{BASE_URL}/tickers/{id}"), id).await
        }

        async fn coin_history(&self, id: &str) -> Result<Vec<OhlcvRecord>, ApiError> {
            self.get_json(&format!("{HISTORY_URL}?coinId={id}"), id).await
        }
    }
}
