use crate::errors::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Provider-native quote shape. Every field is optional; the upstream
/// omits fields freely and nothing here is defaulted. Defaulting is the
/// normalizer's job, adapters only carry the raw datum.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuote {
    pub symbol: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_change: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub regular_market_volume: Option<i64>,
    pub market_cap: Option<f64>,
    /// Quote time as unix seconds
    pub regular_market_time: Option<i64>,
    pub full_exchange_name: Option<String>,
}

/// Provider-native coin record from the supply provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCoin {
    pub market_data: Option<RawCoinMarketData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCoinMarketData {
    pub circulating_supply: Option<f64>,
}

/// Provider-native realtime FX rate. The upstream types every value as a
/// string and keys fields with numbered labels.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFxRate {
    #[serde(rename = "5. Exchange Rate")]
    pub exchange_rate: Option<String>,
    #[serde(rename = "6. Last Refreshed")]
    pub last_refreshed: Option<String>,
}

/// Provider-native FX daily series, keyed by "YYYY-MM-DD" date strings.
/// The BTreeMap keeps entries in ascending date order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFxSeries {
    pub series: BTreeMap<String, RawFxBar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFxBar {
    #[serde(rename = "4. close")]
    pub close: Option<String>,
}

/// Provider-native news article.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    pub uuid: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub published_at: Option<String>,
    pub symbols: Option<Vec<String>>,
}

/// Quote capability: current price/volume/market-cap for stocks, indices
/// and crypto tickers. One network call per fetch, no retries.
#[async_trait]
pub trait QuoteProvider {
    /// Fetch the raw quote for a symbol. An unknown symbol is a distinct
    /// `NotFound` error rather than a generic failure.
    async fn fetch_quote(&self, symbol: &str) -> Result<RawQuote>;
}

/// Supply capability: circulating supply for crypto assets, keyed by the
/// supply provider's own id scheme (see `symbols::supply_id`).
#[async_trait]
pub trait SupplyProvider {
    async fn fetch_coin(&self, id: &str) -> Result<RawCoin>;
}

/// FX capability: current rate plus the daily close series used to compute
/// change when the upstream supplies none.
#[async_trait]
pub trait FxProvider {
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<RawFxRate>;

    async fn fetch_daily_series(&self, from: &str, to: &str) -> Result<RawFxSeries>;
}

/// News capability: latest articles, optionally tagged with tickers.
#[async_trait]
pub trait NewsProvider {
    async fn fetch_news(&self) -> Result<Vec<RawArticle>>;
}
