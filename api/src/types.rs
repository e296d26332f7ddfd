//! Typed records for the upstream REST API.
//!
//! Nullable upstream fields are modeled as `Option`; everything else is
//! decoded strictly so a shape change surfaces as [`crate::ApiError::Decode`]
//! instead of silently rendering garbage.

use serde::Deserialize;

/// One row of the global coin listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CoinListing {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(rename = "type", default)]
    pub coin_type: String,
}

/// Static metadata for a single coin.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CoinInfo {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    #[serde(rename = "type", default)]
    pub coin_type: String,
    pub description: Option<String>,
    #[serde(default)]
    pub open_source: bool,
    pub started_at: Option<String>,
    pub development_status: Option<String>,
    #[serde(default)]
    pub hardware_wallet: bool,
    pub proof_type: Option<String>,
    pub org_structure: Option<String>,
    pub hash_algorithm: Option<String>,
    pub first_data_at: Option<String>,
    pub last_data_at: Option<String>,
}

/// Live ticker snapshot for a single coin.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TickerData {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    #[serde(default)]
    pub total_supply: f64,
    #[serde(default)]
    pub max_supply: f64,
    #[serde(default)]
    pub beta_value: f64,
    pub first_data_at: Option<String>,
    pub last_updated: Option<String>,
    pub quotes: Quotes,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Quotes {
    #[serde(rename = "USD")]
    pub usd: UsdQuote,
}

/// The USD quote block of a ticker.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UsdQuote {
    pub price: f64,
    #[serde(default)]
    pub volume_24h: f64,
    #[serde(default)]
    pub volume_24h_change_24h: f64,
    #[serde(default)]
    pub market_cap: f64,
    #[serde(default)]
    pub market_cap_change_24h: f64,
    #[serde(default)]
    pub percent_change_15m: f64,
    #[serde(default)]
    pub percent_change_30m: f64,
    #[serde(default)]
    pub percent_change_1h: f64,
    #[serde(default)]
    pub percent_change_6h: f64,
    #[serde(default)]
    pub percent_change_12h: f64,
    #[serde(default)]
    pub percent_change_24h: f64,
    #[serde(default)]
    pub percent_change_7d: f64,
    #[serde(default)]
    pub percent_change_30d: f64,
    #[serde(default)]
    pub percent_change_1y: f64,
    #[serde(default)]
    pub ath_price: f64,
    pub ath_date: Option<String>,
    #[serde(default)]
    pub percent_from_price_ath: f64,
}

/// One daily OHLCV candle.
///
/// Timestamps are unix seconds; prices and volume arrive as decimal strings
/// and are parsed only where a number is actually needed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OhlcvRecord {
    pub time_open: i64,
    pub time_close: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    #[serde(default)]
    pub market_cap: f64,
}

impl OhlcvRecord {
    /// Closing price as a float, if the upstream string parses.
    pub fn close_price(&self) -> Option<f64> {
        self.close.parse().ok()
    }
}
