use std::sync::Arc;

use crate::application::services::LinkService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Public base address for short URLs. When `None`, it is derived from
    /// each request's `Host` header.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, base_url: Option<String>) -> Self {
        Self {
            link_service,
            base_url: base_url.map(|b| b.trim_end_matches('/').to_string()),
        }
    }
}
