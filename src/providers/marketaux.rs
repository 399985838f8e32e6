use crate::errors::{MarketHubError, Result};
use crate::providers::base::{NewsProvider, RawArticle};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// News provider client for the MarketAux article feed.
pub struct MarketAuxClient {
    client: Client,
    base_url: String,
    api_token: String,
}

#[derive(Debug, Deserialize)]
struct NewsEnvelope {
    data: Option<Vec<RawArticle>>,
}

impl MarketAuxClient {
    pub fn new(base_url: &str, api_token: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(MarketHubError::RequestError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
        })
    }
}

#[async_trait]
impl NewsProvider for MarketAuxClient {
    async fn fetch_news(&self) -> Result<Vec<RawArticle>> {
        debug!("Fetching latest news");

        let response = self
            .client
            .get(format!("{}/v1/news/all", self.base_url))
            .query(&[("language", "en"), ("api_token", self.api_token.as_str())])
            .send()
            .await
            .map_err(MarketHubError::RequestError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketHubError::UpstreamError(format!(
                "News provider returned status {}",
                status
            )));
        }

        let envelope: NewsEnvelope = response.json().await?;
        envelope
            .data
            .ok_or_else(|| MarketHubError::UpstreamError("Invalid response from news API".to_string()))
    }
}
