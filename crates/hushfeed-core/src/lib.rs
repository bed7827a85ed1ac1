//! Upstream platform model for hushfeed.
//!
//! This crate provides:
//! - The platform's post-type filters and timeline kinds, with a lookup table
//!   for resolving URL tokens
//! - The [`TimelineSource`] seam and its `reqwest` implementation
//! - Timeline parsing ([`parse_container`])
//! - Shared error types

pub mod client;
mod error;
pub mod platform;
pub mod timeline;

pub use client::{ClientConfig, PlatformClient, RawPage, SearchFilters, TimelineSource};
pub use error::{Error, Result};
pub use platform::{PostTypeFilter, PostTypeLookup, TimelineKind};
pub use timeline::{ContentBlock, Cursor, Media, Post, Timeline, TimelineElement, parse_container};
