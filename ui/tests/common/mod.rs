//! Shared test infrastructure: a wiremock relay plus a kittest harness
//! wrapped together so the mock server outlives the app under test.

use egui_kittest::Harness;
use kittest::Queryable;
use quotegen_ui::QuoteApp;
use quotegen_ui::state::State;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Delay added to mocked quote responses so tests can observe the loading
/// state before the fetch resolves.
#[allow(unused)]
pub const RESPONSE_DELAY: Duration = Duration::from_millis(300);

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, QuoteApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, QuoteApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// An app whose relay always serves the given quote/author pair, after
    /// a short delay.
    #[allow(unused)]
    pub async fn new_app_with_quote(quote: &str, author: &str) -> Self {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/quote"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(RESPONSE_DELAY)
                    .set_body_json(serde_json::json!({
                        "quote": quote,
                        "author": author,
                        "genre": "motivation",
                    })),
            )
            .mount(&mock_server)
            .await;

        Self::from_mock_server(mock_server)
    }

    /// An app whose relay always fails with the given status.
    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/quote"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&mock_server)
            .await;

        Self::from_mock_server(mock_server)
    }

    /// An app whose relay serves one good quote, then fails every request
    /// after that.
    #[allow(unused)]
    pub async fn new_app_with_quote_then_failures(quote: &str, author: &str) -> Self {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/quote"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "quote": quote,
                "author": author,
                "genre": "motivation",
            })))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/quote"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        Self::from_mock_server(mock_server)
    }

    fn from_mock_server(mock_server: MockServer) -> Self {
        let state = State::test(mock_server.uri());
        // Construction issues the page-load fetch against the mock relay.
        let app = QuoteApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

/// Steps the harness until a label containing `needle` shows up, or gives up
/// after a few seconds.
pub async fn wait_for_label(harness: &mut Harness<'_, QuoteApp>, needle: &str) -> bool {
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        harness.run();

        if harness.query_by_label_contains(needle).is_some() {
            return true;
        }
    }
    false
}
