//! Shared handler state

use std::sync::Arc;

use setlist_common::AppConfig;
use setlist_service::ServiceContext;

/// Cloned into every handler; both halves are behind `Arc`
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    /// Repositories for the configured storage backend
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("storage", &self.config.storage)
            .field("backend", &self.service_context.storage_health().backend())
            .finish_non_exhaustive()
    }
}
