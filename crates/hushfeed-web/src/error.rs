//! Error types for the web service.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service. Invalid search filters are
//! never errors; they are normalized or redirected before reaching here.

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Web service error type.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The upstream API failed or returned something unparseable.
    #[error("upstream error: {0}")]
    Upstream(#[from] hushfeed_core::Error),

    /// The search path could not be decoded (e.g. a non-UTF-8 escape).
    #[error("bad path: {0}")]
    BadPath(#[from] PathRejection),

    /// Internal server error (header construction, rendering, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::Upstream(err) => {
                tracing::error!(error = %err, "upstream request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Upstream Error",
                    "The platform could not be reached or sent an unexpected response. Please try again later.",
                )
            }
            Self::BadPath(err) => {
                tracing::debug!(error = %err, "undecodable search path");
                (
                    StatusCode::BAD_REQUEST,
                    "Bad Request",
                    "That search address could not be read. Try searching again.",
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred. Please try again later.",
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/search" { "Back to search" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
