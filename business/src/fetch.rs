//! Quote fetching against the relay backend.
//!
//! Fetches run through `ehttp` so the same code works on native and wasm32.
//! The callback never touches UI state directly: it sends a `FetchOutcome`
//! through a `flume` channel and the frame loop drains it. Outcomes carry the
//! generation of the request that produced them so a slow response for a
//! superseded request can be discarded instead of clobbering newer state.

use crate::config::BusinessConfig;
use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The uniform quote payload served by the relay, for upstream success and
/// failure alike. `genre` echoes whatever the request asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub quote: String,
    pub author: String,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("backend response could not be decoded: {0}")]
    Decode(String),
}

/// Result of one fetch cycle, tagged with the generation that started it.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<QuoteResult, FetchError>,
}

pub type QuoteResultSender = flume::Sender<FetchOutcome>;
pub type QuoteResultReceiver = flume::Receiver<FetchOutcome>;

/// Creates the channel pair carrying fetch outcomes back to the frame loop.
pub fn create_quote_channel() -> (QuoteResultSender, QuoteResultReceiver) {
    flume::unbounded()
}

/// Builds the relay request URL for a genre.
pub fn quote_request_url(config: &BusinessConfig, genre: &str) -> String {
    format!(
        "{}/quote?genre={}",
        config.api_url(),
        urlencoding::encode(genre)
    )
}

/// Issues one fire-and-forget quote fetch.
///
/// In-flight requests are never aborted; superseded responses are discarded
/// by generation when the outcome is applied.
pub fn fetch_quote(
    config: &BusinessConfig,
    genre: &str,
    generation: u64,
    sender: QuoteResultSender,
) {
    let url = quote_request_url(config, genre);
    info!("Fetching quote (generation {generation}) from {url}");

    let request = ehttp::Request::get(&url);
    ehttp::fetch(request, move |result| {
        let result = match result {
            Ok(response) => {
                if (200..300).contains(&response.status) {
                    match serde_json::from_slice::<QuoteResult>(&response.bytes) {
                        Ok(quote) => Ok(quote),
                        Err(err) => {
                            error!("Failed to parse quote response: {err}");
                            Err(FetchError::Decode(err.to_string()))
                        }
                    }
                } else {
                    error!("Quote fetch returned status {}", response.status);
                    Err(FetchError::Status(response.status))
                }
            }
            Err(err) => {
                error!("Quote fetch failed: {err}");
                Err(FetchError::Network(err))
            }
        };

        // The receiver is gone during teardown; dropping the outcome is fine.
        let _ = sender.send(FetchOutcome { generation, result });
    });
}
