use std::sync::Arc;

use crate::config::Config;
use crate::storage::PlacementStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Backing store for the placements dataset. Reloaded on every request.
    pub store: Arc<dyn PlacementStore>,
    pub config: Config,
}
