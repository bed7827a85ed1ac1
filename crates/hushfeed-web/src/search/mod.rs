//! Search request resolution.
//!
//! A search request flows through three stages:
//!
//! 1. **Normalize** ([`normalize`]): time-window and post-type tokens
//! 2. **Disambiguate** ([`route`]): redirect to a canonical path, or pick the
//!    sort mode and endpoint
//! 3. **Dispatch** ([`dispatch`]): one upstream query, parsed into a
//!    timeline and packaged as a [`SearchContext`]
//!
//! All state is per request. The only shared input is the read-only
//! post-type lookup table.

pub mod args;
pub mod dispatch;
pub mod normalize;
pub mod route;

pub use args::QueryArgs;
pub use dispatch::{SearchContext, SearchQuery, dispatch};
pub use normalize::{PostFilter, TimeFilter, resolve_post_filter};
pub use route::{
    Resolution, RouteShape, SortMode, canonical_endpoint, disambiguate, entry_redirect,
    search_href,
};
