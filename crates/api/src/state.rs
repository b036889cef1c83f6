use std::sync::Arc;

use recipe_site_cms::ContentGateway;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    gateway: ContentGateway,
    config: AppConfig,
}

impl AppState {
    pub fn new(gateway: ContentGateway, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(InnerState { gateway, config }),
        }
    }

    pub fn gateway(&self) -> &ContentGateway {
        &self.inner.gateway
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
