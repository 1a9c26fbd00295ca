//! Market-data provider access
//!
//! [`QueryParams`] maps a selection to provider request parameters and
//! [`QuoteSource`] performs the request.

pub mod alpha_vantage;
pub mod query;

pub use alpha_vantage::AlphaVantageClient;
pub use query::QueryParams;

use crate::error::Result;
use async_trait::async_trait;

/// Source of raw time-series payloads
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Perform one request and return the decoded JSON body
    async fn fetch_series(&self, params: &QueryParams) -> Result<serde_json::Value>;
}
