use chrono::{DateTime, Utc};
use serde::Serialize;

/// Normalized stock quote
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: i64,
    pub market_cap: f64,
    pub last_updated: DateTime<Utc>,
}

/// Normalized market index. `region` is the upstream exchange name
/// as-is, not a fixed enum.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIndex {
    pub symbol: String,
    pub name: String,
    pub value: f64,
    pub change: f64,
    pub change_percent: f64,
    pub region: String,
    pub last_updated: DateTime<Utc>,
}

/// Normalized crypto asset. `supply` comes from the supply provider,
/// all other fields from the quote provider.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoAsset {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub market_cap: f64,
    pub volume: i64,
    pub supply: f64,
    pub last_updated: DateTime<Utc>,
}

/// Normalized currency pair. `symbol` is derived as "FROM/TO".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPair {
    pub symbol: String,
    pub from_currency: String,
    pub to_currency: String,
    pub rate: f64,
    pub change: f64,
    pub change_percent: f64,
    pub last_updated: DateTime<Utc>,
}
