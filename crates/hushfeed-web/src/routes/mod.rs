//! Route definitions for the web service.
//!
//! ## Routes
//!
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - `GET /search?q=...` - Redirect to the canonical search page (or trending)
//! - `GET /search/{query}` - Popular results
//! - `GET /search/{query}/recent` - Recent results
//! - `GET /search/{query}/{post_filter}` - Popular results of one post type
//! - `GET /search/{query}/recent/{post_filter}` - Recent results of one post type

mod health;
mod search;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete router.
///
/// The static `recent` segment takes priority over `{post_filter}`, so
/// `/search/{query}/recent` never reaches the filter handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/search", get(search::query_param_redirect))
        .route("/search/", get(search::query_param_redirect))
        .route("/search/{query}", get(search::popular))
        .route("/search/{query}/recent", get(search::recent))
        .route("/search/{query}/{post_filter}", get(search::filtered))
        .route(
            "/search/{query}/recent/{post_filter}",
            get(search::recent_filtered),
        )
        .with_state(state)
}

/// Serve robots.txt keeping crawlers away from proxied search results.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nDisallow: /search\n",
    )
}
