//! Shared test utilities for integration tests.
//!
//! Provides `MockQuoteSource`, a canned implementation of `QuoteSource`, and
//! a helper to build the relay router around it.

use quotegen_services::routes;
use quotegen_services::upstream::{QuoteSource, UpstreamError, UpstreamQuote};
use std::future::Future;

/// Mock quote source that resolves to a fixed result.
#[derive(Clone)]
pub struct MockQuoteSource {
    result: Result<UpstreamQuote, UpstreamError>,
}

impl MockQuoteSource {
    /// A source that always yields the given quote/author pair.
    pub fn with_quote(quote: &str, author: &str) -> Self {
        Self {
            result: Ok(UpstreamQuote {
                quote: quote.to_string(),
                author: author.to_string(),
            }),
        }
    }

    /// A source that always fails with the given error.
    pub fn failing(error: UpstreamError) -> Self {
        Self { result: Err(error) }
    }
}

impl QuoteSource for MockQuoteSource {
    fn fetch_one(&self) -> impl Future<Output = Result<UpstreamQuote, UpstreamError>> + Send {
        let result = self.result.clone();
        async move { result }
    }
}

/// Create the relay router around a mock source.
pub fn create_test_app(source: MockQuoteSource) -> axum::Router {
    routes(source)
}
