//! Alpha Vantage compatible HTTP client

use super::{QueryParams, QuoteSource};
use crate::config::BotConfig;
use crate::error::{QuoteError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP client for an Alpha Vantage compatible time-series endpoint
///
/// One request per call, no retries. The whole request, body included, is
/// bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
}

impl AlphaVantageClient {
    /// Create a client for `base_url` with a total request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a client from the bot configuration
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        Self::new(config.api_url.clone(), config.request_timeout)
    }

    /// Endpoint this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageClient {
    async fn fetch_series(&self, params: &QueryParams) -> Result<serde_json::Value> {
        debug!(
            function = params.function,
            symbol = %params.symbol,
            interval = params.interval.unwrap_or("-"),
            "Requesting time series"
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&params.query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::HttpStatus(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| QuoteError::InvalidBody(e.to_string()))
    }
}
