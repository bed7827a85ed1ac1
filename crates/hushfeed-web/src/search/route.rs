//! Route disambiguation: redirect or proceed.
//!
//! Four path shapes reach the resolver:
//!
//! ```text
//! /search/{query}
//! /search/{query}/recent
//! /search/{query}/{post_filter}
//! /search/{query}/recent/{post_filter}
//! ```
//!
//! A filter segment that names no known post type is dropped by redirecting
//! to the unfiltered path for the same sort mode, carrying the query string
//! along. Everything else proceeds to the dispatcher with a sort mode and a
//! canonical endpoint.

use hushfeed_core::{PostTypeFilter, PostTypeLookup};

use super::args::QueryArgs;
use super::normalize::{PostFilter, resolve_post_filter};

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Popular,
    Recent,
}

impl SortMode {
    /// Whether the upstream `latest` flag is set.
    pub fn is_latest(self) -> bool {
        matches!(self, Self::Recent)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Recent => "recent",
        }
    }
}

/// Which search path shape matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteShape {
    /// Path contained the `/recent` segment.
    pub recent: bool,
    /// Raw `{post_filter}` segment, if the path had one.
    pub post_filter: Option<String>,
}

impl RouteShape {
    pub fn sort(&self) -> SortMode {
        if self.recent {
            SortMode::Recent
        } else {
            SortMode::Popular
        }
    }
}

/// What to do with a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Send the browser elsewhere.
    Redirect(String),
    /// Query upstream and render.
    Proceed {
        sort: SortMode,
        post_filter: Option<PostTypeFilter>,
        /// Canonical endpoint with the query HTML-escaped.
        endpoint: String,
    },
}

/// Decide between redirecting and querying for a `/search/{query}/...` path.
///
/// `raw_query` is the request's query string exactly as received.
pub fn disambiguate(
    query: &str,
    shape: &RouteShape,
    lookup: &PostTypeLookup,
    raw_query: Option<&str>,
) -> Resolution {
    let sort = shape.sort();

    let post_filter = match resolve_post_filter(lookup, shape.post_filter.as_deref()) {
        PostFilter::Absent => None,
        PostFilter::Resolved(filter) => Some(filter),
        PostFilter::Unresolved => {
            let target = with_query_string(search_path(query, sort), raw_query);
            tracing::debug!(
                query = %query,
                segment = shape.post_filter.as_deref().unwrap_or_default(),
                target = %target,
                "unknown post filter, redirecting"
            );
            return Resolution::Redirect(target);
        }
    };

    Resolution::Proceed {
        sort,
        post_filter,
        endpoint: canonical_endpoint(query, sort, post_filter),
    }
}

/// Redirect target for bare `/search`.
///
/// A non-empty `q` goes to its canonical search page; anything else goes to
/// the trending page.
pub fn entry_redirect(args: &QueryArgs, trending_path: &str) -> String {
    match args.get("q").filter(|q| !q.is_empty()) {
        Some(q) => search_path(q, SortMode::Popular),
        None => trending_path.to_string(),
    }
}

/// Canonical endpoint for rendering: the query is HTML-escaped, not
/// percent-encoded, so it can be interpolated into markup directly.
pub fn canonical_endpoint(query: &str, sort: SortMode, filter: Option<PostTypeFilter>) -> String {
    let escaped = maud::html! { (query) }.into_string();
    let mut endpoint = format!("/search/{escaped}");
    if sort.is_latest() {
        endpoint.push_str("/recent");
    }
    if let Some(filter) = filter {
        endpoint.push('/');
        endpoint.push_str(filter.as_param());
    }
    endpoint
}

/// Percent-encoded unfiltered search path for a sort mode.
///
/// Only ASCII alphanumerics and `-_.~` are left as-is.
pub fn search_path(query: &str, sort: SortMode) -> String {
    let encoded = urlencoding::encode(query);
    match sort {
        SortMode::Popular => format!("/search/{encoded}"),
        SortMode::Recent => format!("/search/{encoded}/recent"),
    }
}

/// Percent-encoded search path with an optional filter segment, for links.
///
/// A query containing `/`, `?`, `#` or `%` stays inside its own segment.
pub fn search_href(query: &str, sort: SortMode, filter: Option<PostTypeFilter>) -> String {
    let mut path = search_path(query, sort);
    if let Some(filter) = filter {
        path.push('/');
        path.push_str(filter.as_param());
    }
    path
}

fn with_query_string(mut path: String, raw_query: Option<&str>) -> String {
    if let Some(qs) = raw_query.filter(|qs| !qs.is_empty()) {
        path.push('?');
        path.push_str(qs);
    }
    path
}
