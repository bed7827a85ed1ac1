//! Search results page.
//!
//! Every link is rebuilt from the percent-encoded query so that reserved
//! characters in a search term stay inside the `{query}` segment. maud
//! escapes the finished URL when it lands in an attribute.

use hushfeed_core::{PostTypeFilter, TimelineElement};
use maud::{Markup, html};

use super::components::page_shell;
use super::post;
use crate::search::{SearchContext, SortMode, TimeFilter, search_href};

/// Render the search results page.
pub fn render(ctx: &SearchContext, site_name: &str) -> Markup {
    let active_filter = ctx
        .post_filter
        .as_deref()
        .and_then(|name| PostTypeFilter::ALL.into_iter().find(|f| f.as_param() == name));

    // Switching sort, type or window starts from the first page again.
    let base_args = ctx.query_args.without("continuation");
    let base_qs = ctx.query_args.encode_with("continuation", None);
    let here = search_href(&ctx.query, ctx.sort, active_filter);

    let body = html! {
        form class="search-form" action="/search" method="get" {
            input type="search" name="q" value=(ctx.query) placeholder="Search" aria-label="Search";
            button type="submit" { "Search" }
        }

        nav class="tabs" aria-label="Sort" {
            @for sort in [SortMode::Popular, SortMode::Recent] {
                @let href = link(&search_href(&ctx.query, sort, active_filter), &base_qs);
                @if sort == ctx.sort {
                    span class="active" { (sort_label(sort)) }
                } @else {
                    a href=(href) { (sort_label(sort)) }
                }
            }
        }

        nav class="tabs" aria-label="Post type" {
            @let all_href = link(&search_href(&ctx.query, ctx.sort, None), &base_qs);
            @if active_filter.is_none() {
                span class="active" { "All posts" }
            } @else {
                a href=(all_href) { "All posts" }
            }
            @for filter in PostTypeFilter::ALL {
                @let href = link(&search_href(&ctx.query, ctx.sort, Some(filter)), &base_qs);
                @if Some(filter) == active_filter {
                    span class="active" { (filter_label(filter)) }
                } @else {
                    a href=(href) { (filter_label(filter)) }
                }
            }
        }

        nav class="tabs" aria-label="Time" {
            @for window in TimeFilter::WINDOWS {
                @let href = link(&here, &base_args.encode_with("t", window.token()));
                @if window == ctx.time_filter {
                    span class="active" { (window.label()) }
                } @else {
                    a href=(href) { (window.label()) }
                }
            }
        }

        section class="results" {
            @if ctx.timeline.posts().next().is_none() {
                p class="empty" { "No posts found for \u{201c}" (ctx.query) "\u{201d}." }
            }
            @for element in &ctx.timeline.elements {
                @if let TimelineElement::Post(p) = element {
                    (post::render(p))
                }
            }
        }

        @if let Some(cursor) = &ctx.timeline.next {
            div class="pager" {
                a href=(link(&here, &ctx.query_args.encode_with("continuation", Some(cursor)))) rel="next" {
                    "Next page"
                }
            }
        }
    };

    page_shell(&format!("Search: {}", ctx.query), site_name, body)
}

/// Join a percent-encoded path and an encoded query string.
fn link(path: &str, query_string: &str) -> String {
    if query_string.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query_string}")
    }
}

fn sort_label(sort: SortMode) -> &'static str {
    match sort {
        SortMode::Popular => "Popular",
        SortMode::Recent => "Recent",
    }
}

fn filter_label(filter: PostTypeFilter) -> &'static str {
    match filter {
        PostTypeFilter::Text => "Text",
        PostTypeFilter::Photo => "Photo",
        PostTypeFilter::Gif => "GIF",
        PostTypeFilter::Quote => "Quote",
        PostTypeFilter::Link => "Link",
        PostTypeFilter::Chat => "Chat",
        PostTypeFilter::Audio => "Audio",
        PostTypeFilter::Video => "Video",
        PostTypeFilter::Ask => "Ask",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hushfeed_core::{Post, Timeline};

    use crate::search::QueryArgs;

    fn context(query: &str, endpoint: &str, raw_args: &str, next: Option<&str>) -> SearchContext {
        SearchContext {
            timeline: Timeline {
                elements: vec![TimelineElement::Post(Box::new(Post {
                    id: "1".to_string(),
                    blog_name: "staff".to_string(),
                    post_url: String::new(),
                    timestamp: 0,
                    summary: String::new(),
                    tags: vec![],
                    note_count: 0,
                    content: vec![],
                }))],
                next: next.map(str::to_string),
            },
            query: query.to_string(),
            endpoint: endpoint.to_string(),
            query_args: QueryArgs::parse(Some(raw_args)),
            sort: SortMode::Popular,
            time_filter: TimeFilter::Week,
            post_filter: None,
        }
    }

    #[test]
    fn next_page_link_replaces_continuation() {
        let ctx = context("cats", "/search/cats", "t=7&continuation=old", Some("n+1"));
        let html = render(&ctx, "hushfeed").into_string();
        assert!(html.contains(r#"href="/search/cats?t=7&amp;continuation=n%2B1""#));
        assert!(!html.contains("continuation=old"));
    }

    #[test]
    fn no_pager_without_cursor() {
        let ctx = context("cats", "/search/cats", "", None);
        let html = render(&ctx, "hushfeed").into_string();
        assert!(!html.contains("Next page"));
    }

    #[test]
    fn links_percent_encode_the_query() {
        let ctx = context("a&b/c", "/search/a&amp;b/c", "", Some("c"));
        let html = render(&ctx, "hushfeed").into_string();
        assert!(html.contains(r#"href="/search/a%26b%2Fc?continuation=c""#));
        assert!(html.contains(r#"href="/search/a%26b%2Fc/recent""#));
        assert!(html.contains(r#"href="/search/a%26b%2Fc/photo""#));
        assert!(!html.contains("/search/a&amp;b/c"));
    }

    #[test]
    fn filter_and_sort_links_use_canonical_paths() {
        let ctx = context("cats", "/search/cats", "t=7", None);
        let html = render(&ctx, "hushfeed").into_string();
        assert!(html.contains(r#"href="/search/cats/recent?t=7""#));
        assert!(html.contains(r#"href="/search/cats/photo?t=7""#));
        assert!(html.contains(r#"href="/search/cats?t=30""#));
        assert!(html.contains(r#"<span class="active">Past week</span>"#));
        assert!(html.contains(r#"<span class="active">Popular</span>"#));
    }

    #[test]
    fn query_prefilled_and_escaped() {
        let ctx = context("<i>", "/search/&lt;i&gt;", "", None);
        let html = render(&ctx, "hushfeed").into_string();
        assert!(html.contains(r#"value="&lt;i&gt;""#));
        assert!(!html.contains("<i>"));
    }
}
