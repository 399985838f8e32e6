//! Normalization from provider-native shapes to the output entities.
//!
//! All functions here are pure aside from reading the wall clock when the
//! upstream omits a timestamp. Upstream optionality stops at this layer:
//! every numeric field defaults to 0 and every name to "" so that no
//! null ever reaches a consumer.

use crate::errors::{MarketHubError, Result};
use crate::models::{CryptoAsset, CurrencyPair, MarketIndex, NewsItem, StockQuote};
use crate::providers::base::{RawArticle, RawFxRate, RawFxSeries, RawQuote};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Name resolution: prefer the short name, fall back to the long name,
/// fall back to empty.
fn resolve_name(quote: &RawQuote) -> String {
    quote
        .short_name
        .clone()
        .or_else(|| quote.long_name.clone())
        .unwrap_or_default()
}

/// Convert a unix-seconds quote time to an absolute timestamp, or use the
/// current wall clock when the upstream omits it.
fn quote_time(quote: &RawQuote) -> DateTime<Utc> {
    quote
        .regular_market_time
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now)
}

pub fn stock_quote(quote: RawQuote) -> StockQuote {
    StockQuote {
        name: resolve_name(&quote),
        last_updated: quote_time(&quote),
        symbol: quote.symbol.unwrap_or_default(),
        price: quote.regular_market_price.unwrap_or_default(),
        change: quote.regular_market_change.unwrap_or_default(),
        change_percent: quote.regular_market_change_percent.unwrap_or_default(),
        volume: quote.regular_market_volume.unwrap_or_default(),
        market_cap: quote.market_cap.unwrap_or_default(),
    }
}

pub fn market_index(quote: RawQuote) -> MarketIndex {
    MarketIndex {
        name: resolve_name(&quote),
        last_updated: quote_time(&quote),
        symbol: quote.symbol.unwrap_or_default(),
        value: quote.regular_market_price.unwrap_or_default(),
        change: quote.regular_market_change.unwrap_or_default(),
        change_percent: quote.regular_market_change_percent.unwrap_or_default(),
        region: quote.full_exchange_name.unwrap_or_default(),
    }
}

/// Compose a crypto asset from the quote and the separately fetched
/// circulating supply. The supply is already defaulted by the caller when
/// the supply provider failed.
pub fn crypto_asset(quote: RawQuote, supply: f64) -> CryptoAsset {
    CryptoAsset {
        name: resolve_name(&quote),
        last_updated: quote_time(&quote),
        symbol: quote.symbol.unwrap_or_default(),
        price: quote.regular_market_price.unwrap_or_default(),
        change: quote.regular_market_change.unwrap_or_default(),
        change_percent: quote.regular_market_change_percent.unwrap_or_default(),
        market_cap: quote.market_cap.unwrap_or_default(),
        volume: quote.regular_market_volume.unwrap_or_default(),
        supply,
    }
}

fn parse_rate_field(value: &Option<String>, what: &str) -> Result<f64> {
    value
        .as_deref()
        .ok_or_else(|| MarketHubError::DataError(format!("Missing {} in FX response", what)))?
        .parse::<f64>()
        .map_err(|e| MarketHubError::DataError(format!("Invalid {}: {}", what, e)))
}

/// Build a currency pair from the realtime rate and the daily series.
///
/// The change is computed against the previous close: the second-most-recent
/// entry of the series (the most recent one is the current day). A series
/// with fewer than two entries is a fetch failure, not a silent default.
pub fn currency_pair(
    from: &str,
    to: &str,
    rate: RawFxRate,
    series: RawFxSeries,
) -> Result<CurrencyPair> {
    let current = parse_rate_field(&rate.exchange_rate, "exchange rate")?;

    let last_updated = rate
        .last_refreshed
        .as_deref()
        .and_then(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok())
        .map(|naive| naive.and_utc())
        .unwrap_or_else(Utc::now);

    // Series entries are keyed by date ascending; walk backwards and skip
    // the current day's entry.
    let previous_bar = series.series.values().rev().nth(1).ok_or_else(|| {
        MarketHubError::DataError("FX daily series has fewer than two entries".to_string())
    })?;
    let previous_close = parse_rate_field(&previous_bar.close, "previous close")?;

    if previous_close <= 0.0 {
        return Err(MarketHubError::DataError(
            "Non-positive previous close in FX daily series".to_string(),
        ));
    }

    let change = current - previous_close;
    let change_percent = change / previous_close * 100.0;

    Ok(CurrencyPair {
        symbol: format!("{}/{}", from, to),
        from_currency: from.to_string(),
        to_currency: to.to_string(),
        rate: current,
        change,
        change_percent,
        last_updated,
    })
}

/// Normalize a news article. `now` is the aggregation call's wall-clock
/// time, substituted when the article carries no publish time.
pub fn news_item(article: RawArticle, now: DateTime<Utc>) -> NewsItem {
    let published_at = article
        .published_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(now);

    NewsItem {
        id: article.uuid.unwrap_or_default(),
        title: article.title.unwrap_or_default(),
        summary: article.description.unwrap_or_default(),
        source: article.source.unwrap_or_default(),
        url: article.url.unwrap_or_default(),
        image_url: article.image_url.unwrap_or_default(),
        published_at,
        related_symbols: article.symbols.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::base::RawFxBar;
    use std::collections::BTreeMap;

    fn full_quote() -> RawQuote {
        RawQuote {
            symbol: Some("AAPL".to_string()),
            short_name: Some("Apple Inc.".to_string()),
            long_name: Some("Apple Inc. (long)".to_string()),
            regular_market_price: Some(189.5),
            regular_market_change: Some(1.25),
            regular_market_change_percent: Some(0.66),
            regular_market_volume: Some(52_000_000),
            market_cap: Some(2.95e12),
            regular_market_time: Some(1_700_000_000),
            full_exchange_name: Some("NasdaqGS".to_string()),
        }
    }

    #[test]
    fn test_stock_quote_full() {
        let stock = stock_quote(full_quote());
        assert_eq!(stock.symbol, "AAPL");
        assert_eq!(stock.name, "Apple Inc.");
        assert_eq!(stock.price, 189.5);
        assert_eq!(stock.volume, 52_000_000);
        assert_eq!(
            stock.last_updated,
            DateTime::from_timestamp(1_700_000_000, 0).unwrap()
        );
    }

    #[test]
    fn test_name_falls_back_to_long_name() {
        let mut quote = full_quote();
        quote.short_name = None;
        assert_eq!(stock_quote(quote).name, "Apple Inc. (long)");
    }

    #[test]
    fn test_missing_names_yield_empty_string() {
        let mut quote = full_quote();
        quote.short_name = None;
        quote.long_name = None;
        assert_eq!(stock_quote(quote).name, "");
    }

    #[test]
    fn test_missing_numerics_default_to_zero() {
        let stock = stock_quote(RawQuote::default());
        assert_eq!(stock.price, 0.0);
        assert_eq!(stock.change, 0.0);
        assert_eq!(stock.change_percent, 0.0);
        assert_eq!(stock.volume, 0);
        assert_eq!(stock.market_cap, 0.0);
        assert!(stock.price.is_finite());
    }

    #[test]
    fn test_missing_timestamp_uses_now() {
        let before = Utc::now();
        let stock = stock_quote(RawQuote::default());
        let after = Utc::now();
        assert!(stock.last_updated >= before && stock.last_updated <= after);
    }

    #[test]
    fn test_market_index_region() {
        let index = market_index(full_quote());
        assert_eq!(index.region, "NasdaqGS");
        assert_eq!(index.value, 189.5);

        let mut quote = full_quote();
        quote.full_exchange_name = None;
        assert_eq!(market_index(quote).region, "");
    }

    #[test]
    fn test_crypto_asset_carries_supply() {
        let asset = crypto_asset(full_quote(), 19_500_000.0);
        assert_eq!(asset.supply, 19_500_000.0);
        assert_eq!(asset.price, 189.5);
    }

    fn fx_series(bars: &[(&str, &str)]) -> RawFxSeries {
        let mut series = BTreeMap::new();
        for (date, close) in bars {
            series.insert(
                date.to_string(),
                RawFxBar {
                    close: Some(close.to_string()),
                },
            );
        }
        RawFxSeries { series }
    }

    fn fx_rate(rate: &str) -> RawFxRate {
        RawFxRate {
            exchange_rate: Some(rate.to_string()),
            last_refreshed: Some("2024-01-03 12:00:00".to_string()),
        }
    }

    #[test]
    fn test_currency_change_from_previous_close() {
        let series = fx_series(&[
            ("2024-01-01", "1.05"),
            ("2024-01-02", "1.08"),
            ("2024-01-03", "1.10"),
        ]);

        let pair = currency_pair("USD", "EUR", fx_rate("1.10"), series).unwrap();
        assert_eq!(pair.symbol, "USD/EUR");
        assert_eq!(pair.rate, 1.10);
        assert!((pair.change - 0.02).abs() < 1e-9);
        assert!((pair.change_percent - 1.8518518518518516).abs() < 1e-9);
        assert_eq!(
            pair.last_updated.to_rfc3339(),
            "2024-01-03T12:00:00+00:00"
        );
    }

    #[test]
    fn test_currency_series_too_short_is_an_error() {
        let series = fx_series(&[("2024-01-03", "1.10")]);
        let result = currency_pair("USD", "EUR", fx_rate("1.10"), series);
        assert!(matches!(result, Err(MarketHubError::DataError(_))));
    }

    #[test]
    fn test_currency_unparseable_rate_is_an_error() {
        let series = fx_series(&[("2024-01-02", "1.08"), ("2024-01-03", "1.10")]);
        let result = currency_pair("USD", "EUR", fx_rate("not-a-number"), series);
        assert!(matches!(result, Err(MarketHubError::DataError(_))));
    }

    #[test]
    fn test_currency_zero_previous_close_is_an_error() {
        let series = fx_series(&[("2024-01-02", "0"), ("2024-01-03", "1.10")]);
        let result = currency_pair("USD", "EUR", fx_rate("1.10"), series);
        assert!(matches!(result, Err(MarketHubError::DataError(_))));
    }

    #[test]
    fn test_currency_missing_refresh_time_uses_now() {
        let series = fx_series(&[("2024-01-02", "1.08"), ("2024-01-03", "1.10")]);
        let rate = RawFxRate {
            exchange_rate: Some("1.10".to_string()),
            last_refreshed: None,
        };

        let before = Utc::now();
        let pair = currency_pair("USD", "EUR", rate, series).unwrap();
        let after = Utc::now();
        assert!(pair.last_updated >= before && pair.last_updated <= after);
    }

    #[test]
    fn test_news_item_full() {
        let article = RawArticle {
            uuid: Some("abc-123".to_string()),
            title: Some("Markets rally".to_string()),
            description: Some("A summary".to_string()),
            source: Some("example.com".to_string()),
            url: Some("https://example.com/a".to_string()),
            image_url: Some("https://example.com/a.png".to_string()),
            published_at: Some("2024-01-03T09:30:00.000000Z".to_string()),
            symbols: Some(vec!["AAPL".to_string(), "MSFT".to_string()]),
        };

        let item = news_item(article, Utc::now());
        assert_eq!(item.id, "abc-123");
        assert_eq!(item.related_symbols, vec!["AAPL", "MSFT"]);
        assert_eq!(item.published_at.to_rfc3339(), "2024-01-03T09:30:00+00:00");
    }

    #[test]
    fn test_news_item_defaults() {
        let now = Utc::now();
        let item = news_item(RawArticle::default(), now);
        assert_eq!(item.title, "");
        assert_eq!(item.summary, "");
        assert!(item.related_symbols.is_empty());
        assert_eq!(item.published_at, now);
    }
}
