//! hushfeed - a private, script-free search frontend for a remote
//! social-content platform.
//!
//! # Architecture
//!
//! - **Search**: Normalizes filters, redirects to canonical URLs, and issues
//!   exactly one upstream timeline query per page
//! - **Render**: Generates HTML with maud (compile-time templates)
//! - **Upstream**: [`hushfeed_core`] provides the API client and the
//!   timeline parser
//!
//! # URL Pattern
//!
//! ```text
//! GET /search?q={text}
//! GET /search/{query}[/recent][/{post_filter}]?t={days}&continuation={token}
//! ```
//!
//! Unknown post filters redirect to the unfiltered page for the same sort
//! order; unknown time windows are silently treated as "all time".
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - URLs are validated (HTTPS/HTTP only) before use in attributes
//! - Strict Content-Security-Policy: no JavaScript execution
//! - X-Frame-Options: DENY prevents clickjacking

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod search;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
