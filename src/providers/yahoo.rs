use crate::errors::{MarketHubError, Result};
use crate::providers::base::{QuoteProvider, RawQuote};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Quote provider client for the Yahoo Finance v7 quote endpoint.
/// Serves stocks, indices, crypto tickers and FX pairs alike.
pub struct YahooFinanceClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: Option<QuoteResponse>,
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    result: Option<Vec<RawQuote>>,
}

impl YahooFinanceClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(MarketHubError::RequestError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl QuoteProvider for YahooFinanceClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<RawQuote> {
        debug!("Fetching quote for {}", symbol);

        let response = self
            .client
            .get(format!("{}/v7/finance/quote", self.base_url))
            .query(&[("symbols", symbol)])
            .send()
            .await
            .map_err(MarketHubError::RequestError)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketHubError::NotFound(format!(
                "Symbol {} not found",
                symbol
            )));
        }
        if !status.is_success() {
            return Err(MarketHubError::UpstreamError(format!(
                "Quote provider returned status {}",
                status
            )));
        }

        let envelope: QuoteEnvelope = response.json().await?;

        // An unknown symbol comes back as a 200 with an empty result list
        envelope
            .quote_response
            .and_then(|r| r.result)
            .and_then(|mut quotes| {
                if quotes.is_empty() {
                    None
                } else {
                    Some(quotes.remove(0))
                }
            })
            .ok_or_else(|| MarketHubError::NotFound(format!("Symbol {} not found", symbol)))
    }
}
