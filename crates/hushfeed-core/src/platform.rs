//! Platform-defined enumerations: post-type filters and timeline kinds.
//!
//! URL tokens are resolved against these through [`PostTypeLookup`], a
//! table built once at startup and shared read-only afterwards.

use std::collections::HashMap;
use std::fmt;

/// Category of post a search can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostTypeFilter {
    Text,
    Photo,
    Gif,
    Quote,
    Link,
    Chat,
    Audio,
    Video,
    Ask,
}

impl PostTypeFilter {
    /// Every filter the platform accepts, in display order.
    pub const ALL: [PostTypeFilter; 9] = [
        Self::Text,
        Self::Photo,
        Self::Gif,
        Self::Quote,
        Self::Link,
        Self::Chat,
        Self::Audio,
        Self::Video,
        Self::Ask,
    ];

    /// Upper-case platform name, the key URL tokens are matched against.
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Photo => "PHOTO",
            Self::Gif => "GIF",
            Self::Quote => "QUOTE",
            Self::Link => "LINK",
            Self::Chat => "CHAT",
            Self::Audio => "AUDIO",
            Self::Video => "VIDEO",
            Self::Ask => "ASK",
        }
    }

    /// Lower-case form used in URLs and in the upstream query string.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Photo => "photo",
            Self::Gif => "gif",
            Self::Quote => "quote",
            Self::Link => "link",
            Self::Chat => "chat",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Ask => "ask",
        }
    }
}

impl fmt::Display for PostTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Name → filter table for resolving raw URL tokens.
#[derive(Debug, Clone)]
pub struct PostTypeLookup {
    by_name: HashMap<&'static str, PostTypeFilter>,
}

impl PostTypeLookup {
    /// Build the table from the platform's filter set.
    pub fn new() -> Self {
        let by_name = PostTypeFilter::ALL
            .iter()
            .map(|filter| (filter.name(), *filter))
            .collect();
        Self { by_name }
    }

    /// Resolve a raw token case-insensitively. `None` when nothing matches.
    pub fn resolve(&self, token: &str) -> Option<PostTypeFilter> {
        self.by_name.get(token.to_uppercase().as_str()).copied()
    }
}

impl Default for PostTypeLookup {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of object a timeline query returns. Search results are posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Post,
}

impl TimelineKind {
    /// Value of the upstream `timeline_type` parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Post => "post",
        }
    }
}
