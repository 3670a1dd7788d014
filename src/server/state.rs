use crate::adapters::storage::LocalStorage;
use crate::core::contact::ContactService;
use crate::core::page::PageRenderer;
use std::sync::Arc;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<PageRenderer>,
    pub contact: ContactService,
    /// Asset files, resolved relative to the working directory.
    pub assets: LocalStorage,
}

impl AppState {
    pub fn new(renderer: PageRenderer, contact: ContactService) -> Self {
        Self {
            renderer: Arc::new(renderer),
            contact,
            assets: LocalStorage::new("."),
        }
    }

    pub fn resume_path(&self) -> &str {
        &self.renderer.config().assets.resume_path
    }
}
