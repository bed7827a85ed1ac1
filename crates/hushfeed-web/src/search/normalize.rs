//! Normalization of the time-window and post-type filter tokens.
//!
//! Both functions are total. A bad time token quietly becomes "all time";
//! a bad post-type token becomes [`PostFilter::Unresolved`], which the
//! route disambiguator turns into a redirect. The two policies differ on
//! purpose and must stay that way: the platform itself behaves like this.

use hushfeed_core::{PostTypeFilter, PostTypeLookup};

/// Time window a search is restricted to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeFilter {
    #[default]
    All,
    Year,
    HalfYear,
    Month,
    Week,
    Day,
}

impl TimeFilter {
    /// Windows offered in the UI, narrowest last.
    pub const WINDOWS: [TimeFilter; 6] = [
        Self::All,
        Self::Year,
        Self::HalfYear,
        Self::Month,
        Self::Week,
        Self::Day,
    ];

    /// Normalize a raw `t` token. Anything but an exact match is all-time.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("365") => Self::Year,
            Some("180") => Self::HalfYear,
            Some("30") => Self::Month,
            Some("7") => Self::Week,
            Some("1") => Self::Day,
            _ => Self::All,
        }
    }

    /// Day count forwarded upstream. 0 means no restriction.
    pub fn days(self) -> u16 {
        match self {
            Self::All => 0,
            Self::Year => 365,
            Self::HalfYear => 180,
            Self::Month => 30,
            Self::Week => 7,
            Self::Day => 1,
        }
    }

    /// Value of the `t` parameter, `None` for all-time.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Year => Some("365"),
            Self::HalfYear => Some("180"),
            Self::Month => Some("30"),
            Self::Week => Some("7"),
            Self::Day => Some("1"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All time",
            Self::Year => "Past year",
            Self::HalfYear => "Past 6 months",
            Self::Month => "Past month",
            Self::Week => "Past week",
            Self::Day => "Past day",
        }
    }
}

/// Outcome of resolving the `<post_filter>` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    /// The path had no filter segment.
    Absent,
    /// The segment named a known post type.
    Resolved(PostTypeFilter),
    /// The segment was present but matched nothing.
    Unresolved,
}

/// Resolve a raw post-filter segment against the platform's post types.
pub fn resolve_post_filter(lookup: &PostTypeLookup, token: Option<&str>) -> PostFilter {
    match token {
        None => PostFilter::Absent,
        Some(token) => lookup
            .resolve(token)
            .map_or(PostFilter::Unresolved, PostFilter::Resolved),
    }
}
