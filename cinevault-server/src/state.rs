use std::fmt;
use std::sync::Arc;

use cinevault_core::ContentStore;

use crate::config::Config;

/// Shared application state: the content store behind its trait object, the
/// resolved configuration, and an outbound HTTP client for the resolver.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, config: Arc<Config>) -> Self {
        Self {
            store,
            config,
            http: reqwest::Client::new(),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
