//! Application state for the HTTP server.

use crate::db::repository::EventRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for event storage
    pub repository: Arc<dyn EventRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }
}
