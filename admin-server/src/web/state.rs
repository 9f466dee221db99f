//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedBackend;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached booking backend client
    pub backend: Arc<CachedBackend>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(backend: CachedBackend) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}
