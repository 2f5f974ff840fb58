//! Outbound client for the external quotes provider.
//!
//! The provider returns a JSON array of quote objects; the relay only ever
//! uses the first element. The `QuoteSource` trait is the seam that lets
//! integration tests swap the real provider for a mock.

use crate::config::Config;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Header carrying the provider credential.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Per-request timeout for the upstream call. A hung provider must not hold
/// the relay handler open indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One element of the collection returned by the quotes provider.
///
/// Unknown fields (e.g. `category`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamQuote {
    pub quote: String,
    pub author: String,
}

#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(String),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("upstream response could not be decoded: {0}")]
    Decode(String),
    #[error("upstream returned an empty quote collection")]
    EmptyBody,
}

/// A source of single quotes.
pub trait QuoteSource {
    /// Fetch one quote from the provider.
    fn fetch_one(&self) -> impl Future<Output = Result<UpstreamQuote, UpstreamError>> + Send;
}

/// Production `QuoteSource` backed by the api-ninjas quotes endpoint.
#[derive(Debug, Clone)]
pub struct ApiNinjasSource {
    client: reqwest::Client,
    quotes_url: String,
    api_key: Option<String>,
}

impl ApiNinjasSource {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            quotes_url: format!("{}/v1/quotes", base_url.trim_end_matches('/')),
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.quotes_api_url(),
            config.quotes_api_key().map(str::to_owned),
        )
    }
}

impl QuoteSource for ApiNinjasSource {
    fn fetch_one(&self) -> impl Future<Output = Result<UpstreamQuote, UpstreamError>> + Send {
        let client = self.client.clone();
        let url = self.quotes_url.clone();
        let api_key = self.api_key.clone();

        async move {
            let mut request = client.get(&url).timeout(REQUEST_TIMEOUT);
            if let Some(key) = &api_key {
                request = request.header(API_KEY_HEADER, key);
            }

            let response = request
                .send()
                .await
                .map_err(|e| UpstreamError::Request(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(UpstreamError::Status(status.as_u16()));
            }

            let quotes: Vec<UpstreamQuote> = response
                .json()
                .await
                .map_err(|e| UpstreamError::Decode(e.to_string()))?;

            quotes.into_iter().next().ok_or(UpstreamError::EmptyBody)
        }
    }
}
