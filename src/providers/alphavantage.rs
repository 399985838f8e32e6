use crate::errors::{MarketHubError, Result};
use crate::providers::base::{FxProvider, RawFxBar, RawFxRate, RawFxSeries};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// FX provider client for the AlphaVantage query endpoint.
///
/// The upstream multiplexes everything through one URL with a `function`
/// parameter and reports failures inside a 200 body: an "Error Message"
/// key for unknown pairs, a "Note" key when the free-tier rate limit is
/// exhausted.
pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct RateEnvelope {
    #[serde(rename = "Realtime Currency Exchange Rate")]
    rate: Option<RawFxRate>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeriesEnvelope {
    #[serde(rename = "Time Series FX (Daily)")]
    series: Option<BTreeMap<String, RawFxBar>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
}

impl AlphaVantageClient {
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(MarketHubError::RequestError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    async fn query<T: serde::de::DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(format!("{}/query", self.base_url))
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(MarketHubError::RequestError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketHubError::UpstreamError(format!(
                "FX provider returned status {}",
                status
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl FxProvider for AlphaVantageClient {
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<RawFxRate> {
        debug!("Fetching exchange rate {}/{}", from, to);

        let envelope: RateEnvelope = self
            .query(&[
                ("function", "CURRENCY_EXCHANGE_RATE"),
                ("from_currency", from),
                ("to_currency", to),
            ])
            .await?;

        if let Some(msg) = envelope.error_message {
            return Err(MarketHubError::NotFound(msg));
        }
        if let Some(note) = envelope.note {
            return Err(MarketHubError::UpstreamError(note));
        }

        envelope.rate.ok_or_else(|| {
            MarketHubError::NotFound(format!("Currency pair {}/{} not found", from, to))
        })
    }

    async fn fetch_daily_series(&self, from: &str, to: &str) -> Result<RawFxSeries> {
        debug!("Fetching daily FX series {}/{}", from, to);

        let envelope: SeriesEnvelope = self
            .query(&[
                ("function", "FX_DAILY"),
                ("from_symbol", from),
                ("to_symbol", to),
            ])
            .await?;

        if let Some(msg) = envelope.error_message {
            return Err(MarketHubError::NotFound(msg));
        }
        if let Some(note) = envelope.note {
            return Err(MarketHubError::UpstreamError(note));
        }

        let series = envelope.series.ok_or_else(|| {
            MarketHubError::NotFound(format!("Currency pair {}/{} not found", from, to))
        })?;

        Ok(RawFxSeries { series })
    }
}
