//! Error types for talking to the upstream platform.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying or parsing upstream timelines.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream API answered with a non-2xx status.
    #[error("upstream returned {status}: {body}")]
    Status {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON document did not have the expected timeline shape.
    #[error("malformed timeline: {0}")]
    Parse(String),

    /// Client settings that cannot be turned into a request (e.g. a token
    /// that is not a valid header value).
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The configured API base could not be joined with an endpoint path.
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
}
