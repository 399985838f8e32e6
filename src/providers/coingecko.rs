use crate::errors::{MarketHubError, Result};
use crate::providers::base::{RawCoin, SupplyProvider};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// Supply provider client for the CoinGecko coins endpoint.
pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
}

impl CoinGeckoClient {
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
impl SupplyProvider for CoinGeckoClient {
    async fn fetch_coin(&self, id: &str) -> Result<RawCoin> {
        debug!("Fetching coin data for {}", id);

        let response = self
            .client
            .get(format!("{}/api/v3/coins/{}", self.base_url, id))
            .send()
            .await
            .map_err(MarketHubError::RequestError)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketHubError::NotFound(format!("Coin {} not found", id)));
        }
        if !status.is_success() {
            return Err(MarketHubError::UpstreamError(format!(
                "Supply provider returned status {}",
                status
            )));
        }

        Ok(response.json().await?)
    }
}
