//! Application configuration loaded from environment variables.

use std::time::Duration;

use anyhow::Context;
use hushfeed_core::ClientConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Root of the upstream platform API, without trailing slash.
    pub api_base: String,

    /// Bearer token for the upstream API.
    pub api_token: String,

    /// User-Agent sent upstream.
    pub user_agent: String,

    /// Timeout for a single upstream request.
    pub api_timeout: Duration,

    /// Site name shown in page titles.
    pub site_name: String,

    /// Where `/search` without a query sends the browser.
    pub trending_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `HUSHFEED_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `HUSHFEED_API_BASE`: Upstream API root (default: "https://www.tumblr.com/api/v2")
    /// - `HUSHFEED_API_TOKEN`: Bearer token for the upstream API (default: empty)
    /// - `HUSHFEED_USER_AGENT`: User-Agent for upstream requests (default: "hushfeed/<version>")
    /// - `HUSHFEED_API_TIMEOUT_SECS`: Upstream request timeout in seconds (default: 15)
    /// - `HUSHFEED_SITE_NAME`: Site name (default: "hushfeed")
    /// - `HUSHFEED_TRENDING_PATH`: Redirect target for an empty search (default: "/explore/trending")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("HUSHFEED_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let api_base = std::env::var("HUSHFEED_API_BASE")
            .unwrap_or_else(|_| "https://www.tumblr.com/api/v2".to_string())
            .trim_end_matches('/')
            .to_string();

        let api_token = std::env::var("HUSHFEED_API_TOKEN").unwrap_or_default();

        let user_agent = std::env::var("HUSHFEED_USER_AGENT")
            .unwrap_or_else(|_| concat!("hushfeed/", env!("CARGO_PKG_VERSION")).to_string());

        let api_timeout = match std::env::var("HUSHFEED_API_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("HUSHFEED_API_TIMEOUT_SECS is not a number: {raw}"))?,
            ),
            Err(_) => Duration::from_secs(15),
        };

        let site_name =
            std::env::var("HUSHFEED_SITE_NAME").unwrap_or_else(|_| "hushfeed".to_string());

        let trending_path = std::env::var("HUSHFEED_TRENDING_PATH")
            .unwrap_or_else(|_| "/explore/trending".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            api_base = %api_base,
            has_token = !api_token.is_empty(),
            timeout_secs = api_timeout.as_secs(),
            site_name = %site_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            api_base,
            api_token,
            user_agent,
            api_timeout,
            site_name,
            trending_path,
        })
    }

    /// Settings for the upstream API client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base: self.api_base.clone(),
            api_token: self.api_token.clone(),
            user_agent: self.user_agent.clone(),
            timeout: self.api_timeout,
        }
    }
}
