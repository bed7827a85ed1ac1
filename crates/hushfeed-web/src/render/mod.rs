//! HTML rendering.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic XSS protection (all dynamic values are escaped).

pub mod components;
pub mod post;
pub mod search;

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use maud::Markup;

/// Build an HTML response with security headers.
///
/// Pages are never cached: search results change constantly and may carry a
/// continuation token tied to one session.
pub fn page_response(markup: Markup) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(header::REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    (StatusCode::OK, headers, markup.into_string()).into_response()
}
