//! Application state shared across all request handlers.

use std::sync::Arc;

use hushfeed_core::{PlatformClient, PostTypeFilter, PostTypeLookup, TimelineSource};

use crate::config::Config;

/// Shared application state available to all request handlers.
///
/// Everything here is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Upstream timeline API.
    pub api: Arc<dyn TimelineSource>,

    /// Application configuration.
    pub config: Arc<Config>,

    /// Post-type filter lookup table.
    pub post_types: Arc<PostTypeLookup>,
}

impl AppState {
    /// Create application state backed by the real platform client.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = PlatformClient::new(&config.client_config())?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create application state around any timeline source.
    pub fn with_source(config: Config, api: Arc<dyn TimelineSource>) -> Self {
        let post_types = PostTypeLookup::new();

        tracing::info!(
            post_types = PostTypeFilter::ALL.len(),
            api_base = %config.api_base,
            "application state initialized"
        );

        Self {
            api,
            config: Arc::new(config),
            post_types: Arc::new(post_types),
        }
    }
}
