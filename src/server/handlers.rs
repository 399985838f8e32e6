use crate::models::{CryptoAsset, CurrencyPair, MarketIndex, NewsItem, StockQuote};
use crate::server::{ApiError, AppState};
use crate::{normalize, symbols};
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use log::warn;
use serde::Deserialize;
use std::sync::Arc;

pub async fn root() -> &'static str {
    "Welcome to the MarketHub API! Use /api/stock/:symbol to get stock data."
}

pub async fn get_stock(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<StockQuote>, ApiError> {
    let quote = state
        .quotes
        .fetch_quote(&symbol)
        .await
        .map_err(|e| ApiError::wrap(e, "Stock not found", "Stock fetch failed"))?;

    Ok(Json(normalize::stock_quote(quote)))
}

pub async fn get_index(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<MarketIndex>, ApiError> {
    let quote = state
        .quotes
        .fetch_quote(&symbol)
        .await
        .map_err(|e| ApiError::wrap(e, "Index not found", "Index fetch failed"))?;

    Ok(Json(normalize::market_index(quote)))
}

pub async fn get_crypto(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<CryptoAsset>, ApiError> {
    let symbol = symbol.to_uppercase();
    let supply_id = symbols::supply_id(&symbol);

    // Quote and supply come from independent upstreams, fetch both at once
    let (quote_result, coin_result) = tokio::join!(
        state.quotes.fetch_quote(&symbol),
        state.supply.fetch_coin(&supply_id),
    );

    let quote =
        quote_result.map_err(|e| ApiError::wrap(e, "Crypto not found", "Crypto fetch failed"))?;

    // The supply lookup is the one tolerated partial failure: a miss
    // degrades to 0 instead of failing the request
    let supply = match coin_result {
        Ok(coin) => coin
            .market_data
            .and_then(|m| m.circulating_supply)
            .unwrap_or_default(),
        Err(e) => {
            warn!("Supply lookup failed for {}: {}", supply_id, e);
            0.0
        }
    };

    Ok(Json(normalize::crypto_asset(quote, supply)))
}

#[derive(Debug, Deserialize)]
pub struct CurrencyParams {
    from: Option<String>,
    to: Option<String>,
}

pub async fn get_currency(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CurrencyParams>,
) -> Result<Json<CurrencyPair>, ApiError> {
    let from = params
        .from
        .unwrap_or_else(|| "USD".to_string())
        .to_uppercase();
    let to = params
        .to
        .unwrap_or_else(|| "EUR".to_string())
        .to_uppercase();

    let wrap = |e| ApiError::wrap(e, "Currency pair not found", "Currency fetch failed");

    let (rate_result, series_result) = tokio::join!(
        state.fx.fetch_rate(&from, &to),
        state.fx.fetch_daily_series(&from, &to),
    );

    let rate = rate_result.map_err(wrap)?;
    let series = series_result.map_err(wrap)?;

    let pair = normalize::currency_pair(&from, &to, rate, series).map_err(wrap)?;
    Ok(Json(pair))
}

pub async fn get_news(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NewsItem>>, ApiError> {
    let articles = state
        .news
        .fetch_news()
        .await
        .map_err(|e| ApiError::wrap(e, "News not found", "Failed to fetch news"))?;

    let now = Utc::now();
    let items = articles
        .into_iter()
        .map(|article| normalize::news_item(article, now))
        .collect();

    Ok(Json(items))
}
