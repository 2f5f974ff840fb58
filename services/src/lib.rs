use crate::upstream::QuoteSource;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub mod config;
pub mod upstream;

/// Genre assumed when the caller does not supply one.
pub const DEFAULT_GENRE: &str = "life";

/// Quote substituted whenever the upstream call fails.
pub const FALLBACK_QUOTE: &str =
    "Keep going. Everything you need will come to you at the perfect time.";

/// Author attributed to the fallback quote.
pub const FALLBACK_AUTHOR: &str = "Unknown";

/// The uniform response shape for `/api/quote`, returned on upstream success
/// and failure alike. `genre` echoes the request input verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub quote: String,
    pub author: String,
    pub genre: String,
}

impl QuoteResult {
    /// The fixed payload served when the upstream provider is unreachable,
    /// errors, or returns nothing usable.
    pub fn fallback(genre: impl Into<String>) -> Self {
        Self {
            quote: FALLBACK_QUOTE.to_string(),
            author: FALLBACK_AUTHOR.to_string(),
            genre: genre.into(),
        }
    }
}

#[derive(Clone)]
struct AppState<Q> {
    source: Q,
}

/// Creates the relay routes on top of a quote source.
///
/// Every response carries a permissive CORS header so the UI can call the
/// relay from any origin.
pub fn routes<Q>(source: Q) -> Router
where
    Q: QuoteSource + Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(root))
        .route("/api/quote", get(get_quote::<Q>))
        .fallback(catch_all)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState { source })
}

async fn root() -> &'static str {
    "Backend root working"
}

#[derive(Debug, Deserialize)]
struct QuoteQuery {
    genre: Option<String>,
}

/// `GET /api/quote?genre=<string>`.
///
/// Always answers 200. Upstream failures are absorbed into the fallback
/// payload rather than surfaced: a quote widget should degrade to a canned
/// quote, not to an error page. The genre is a cosmetic label, echoed back
/// without validation and never forwarded upstream.
async fn get_quote<Q>(
    State(state): State<AppState<Q>>,
    Query(query): Query<QuoteQuery>,
) -> impl IntoResponse
where
    Q: QuoteSource + Clone + Send + Sync + 'static,
{
    let genre = query.genre.unwrap_or_else(|| DEFAULT_GENRE.to_string());

    let result = match state.source.fetch_one().await {
        Ok(selected) => QuoteResult {
            quote: selected.quote,
            author: selected.author,
            genre,
        },
        Err(err) => {
            warn!("upstream quote fetch failed, serving fallback: {err}");
            QuoteResult::fallback(genre)
        }
    };

    (StatusCode::OK, Json(result))
}

async fn catch_all() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
