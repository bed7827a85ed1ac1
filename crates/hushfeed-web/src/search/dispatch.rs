//! Query dispatch: one upstream call per request, then the render context.

use hushfeed_core::{
    PostTypeFilter, SearchFilters, Timeline, TimelineKind, TimelineSource, parse_container,
};

use super::args::QueryArgs;
use super::normalize::TimeFilter;
use super::route::SortMode;

/// A fully normalized search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search term, already percent-decoded.
    pub term: String,
    pub time_filter: TimeFilter,
    pub post_filter: Option<PostTypeFilter>,
    pub sort: SortMode,
    /// Continuation token from the `continuation` parameter.
    pub continuation: Option<String>,
}

impl SearchQuery {
    /// Assemble a query from the resolved route and the request parameters.
    pub fn new(
        term: &str,
        sort: SortMode,
        post_filter: Option<PostTypeFilter>,
        args: &QueryArgs,
    ) -> Self {
        Self {
            term: term.to_string(),
            time_filter: TimeFilter::from_token(args.get("t")),
            post_filter,
            sort,
            continuation: args.get("continuation").map(str::to_string),
        }
    }

    fn filters(&self) -> SearchFilters {
        SearchFilters {
            days: self.time_filter.days(),
            post_type_filter: self.post_filter,
            latest: self.sort.is_latest(),
        }
    }
}

/// Everything the search template needs.
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub timeline: Timeline,
    /// Search term as the user typed it.
    pub query: String,
    /// Canonical endpoint, HTML-escaped.
    pub endpoint: String,
    /// Request parameters, for building pagination and filter links.
    pub query_args: QueryArgs,
    pub sort: SortMode,
    pub time_filter: TimeFilter,
    /// Lower-cased post-type filter name.
    pub post_filter: Option<String>,
}

/// Run the search upstream and package the result for rendering.
///
/// Upstream and parse failures are returned as-is; nothing is retried.
pub async fn dispatch(
    api: &dyn TimelineSource,
    search: SearchQuery,
    endpoint: String,
    query_args: QueryArgs,
) -> hushfeed_core::Result<SearchContext> {
    let page = api
        .timeline_search(
            &search.term,
            TimelineKind::Post,
            search.continuation.as_deref(),
            &search.filters(),
        )
        .await?;

    let timeline = parse_container(page)?;

    tracing::debug!(
        query = %search.term,
        sort = search.sort.as_str(),
        elements = timeline.elements.len(),
        has_next = timeline.next.is_some(),
        "search results parsed"
    );

    Ok(SearchContext {
        timeline,
        query: search.term,
        endpoint,
        query_args,
        sort: search.sort,
        time_filter: search.time_filter,
        post_filter: search.post_filter.map(|f| f.as_param().to_string()),
    })
}
