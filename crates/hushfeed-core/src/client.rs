//! Upstream timeline API client.
//!
//! [`TimelineSource`] is the seam the web layer depends on; [`PlatformClient`]
//! is the production implementation over `reqwest`. One call issues exactly
//! one HTTP request. There is no retry loop and no pagination loop here:
//! the next page is driven by the caller passing the continuation back in.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{Error, Result};
use crate::platform::{PostTypeFilter, TimelineKind};

/// Raw JSON document returned by a timeline endpoint.
pub type RawPage = serde_json::Value;

/// Number of results requested per page.
pub const PAGE_LIMIT: u32 = 20;

/// Longest response body kept in [`Error::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Optional filters for a timeline search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Restrict to posts from the last N days. 0 means all time.
    pub days: u16,
    /// Restrict to one post type.
    pub post_type_filter: Option<PostTypeFilter>,
    /// Sort by recency instead of popularity.
    pub latest: bool,
}

/// Source of search timelines.
#[async_trait]
pub trait TimelineSource: Send + Sync {
    /// Run one search query against the upstream timeline API.
    async fn timeline_search(
        &self,
        query: &str,
        kind: TimelineKind,
        continuation: Option<&str>,
        filters: &SearchFilters,
    ) -> Result<RawPage>;
}

/// Connection settings for [`PlatformClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without trailing slash (e.g. "https://www.tumblr.com/api/v2").
    pub api_base: String,
    /// Bearer token sent with every request. Empty disables the header.
    pub api_token: String,
    /// User-Agent header value.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// `reqwest`-backed client for the platform's public API.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    api_base: String,
}

impl PlatformClient {
    /// Build a client with default headers baked in.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !config.api_token.is_empty() {
            let value = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
                .map_err(|e| Error::Config(format!("API token is not a valid header: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<url::Url> {
        Ok(url::Url::parse(&format!("{}/{path}", self.api_base))?)
    }
}

#[async_trait]
impl TimelineSource for PlatformClient {
    async fn timeline_search(
        &self,
        query: &str,
        kind: TimelineKind,
        continuation: Option<&str>,
        filters: &SearchFilters,
    ) -> Result<RawPage> {
        let url = self.endpoint("timeline/search")?;
        let params = search_params(query, kind, continuation, filters);

        tracing::debug!(
            query = %query,
            days = filters.days,
            post_type = ?filters.post_type_filter,
            latest = filters.latest,
            has_continuation = continuation.is_some(),
            "timeline search"
        );

        let response = self.http.get(url).query(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "timeline search failed upstream");
            return Err(Error::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Query parameters for `GET timeline/search`.
pub fn search_params(
    query: &str,
    kind: TimelineKind,
    continuation: Option<&str>,
    filters: &SearchFilters,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("query", query.to_string()),
        ("timeline_type", kind.as_param().to_string()),
        ("limit", PAGE_LIMIT.to_string()),
        ("days", filters.days.to_string()),
        (
            "mode",
            if filters.latest { "recent" } else { "top" }.to_string(),
        ),
        ("skip_component", "related_tags,blog_search".to_string()),
        ("reblog_info", "true".to_string()),
        ("query_source", "typed_query".to_string()),
    ];

    if let Some(filter) = filters.post_type_filter {
        params.push(("post_type_filter", filter.to_string()));
    }
    if let Some(cursor) = continuation {
        params.push(("cursor", cursor.to_string()));
    }

    params
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_search_params_defaults() {
        let params = search_params("cats", TimelineKind::Post, None, &SearchFilters::default());
        assert_eq!(param(&params, "query"), Some("cats"));
        assert_eq!(param(&params, "timeline_type"), Some("post"));
        assert_eq!(param(&params, "days"), Some("0"));
        assert_eq!(param(&params, "mode"), Some("top"));
        assert_eq!(param(&params, "limit"), Some("20"));
        assert_eq!(param(&params, "post_type_filter"), None);
        assert_eq!(param(&params, "cursor"), None);
    }

    #[test]
    fn test_search_params_with_filters() {
        let filters = SearchFilters {
            days: 30,
            post_type_filter: Some(PostTypeFilter::Video),
            latest: true,
        };
        let params = search_params("a b", TimelineKind::Post, Some("abc+/="), &filters);
        assert_eq!(param(&params, "days"), Some("30"));
        assert_eq!(param(&params, "mode"), Some("recent"));
        assert_eq!(param(&params, "post_type_filter"), Some("video"));
        assert_eq!(param(&params, "cursor"), Some("abc+/="));
        assert_eq!(param(&params, "query"), Some("a b"));
    }

    #[test]
    fn test_truncate_body_short() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn test_truncate_body_long() {
        let long = "é".repeat(400);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= MAX_ERROR_BODY + 3);
    }

    #[test]
    fn test_client_builds_and_trims_base() {
        let client = PlatformClient::new(&ClientConfig {
            api_base: "https://api.example.com/v2/".to_string(),
            api_token: "token".to_string(),
            user_agent: "test".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        let url = client.endpoint("timeline/search").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v2/timeline/search");
    }

    #[test]
    fn test_client_rejects_bad_token() {
        let result = PlatformClient::new(&ClientConfig {
            api_base: "https://api.example.com".to_string(),
            api_token: "bad\ntoken".to_string(),
            user_agent: "test".to_string(),
            timeout: Duration::from_secs(5),
        });
        match result {
            Err(err @ Error::Config(_)) => {
                assert!(err.to_string().starts_with("invalid client configuration"));
            }
            other => panic!("expected a config error, got {other:?}"),
        }
    }
}
