//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::market::Marketplace;
use crate::search::SmartSearch;

/// Shared state: the directory store and the configured search path
pub struct AppState {
    /// The marketplace directory (internally lock-guarded)
    pub market: Arc<Marketplace>,

    /// Smart search with optional remote scorer and local fallback
    pub search: Arc<SmartSearch>,
}

impl AppState {
    /// Create a new AppState over a marketplace and search configuration
    pub fn new(market: Arc<Marketplace>, search: SmartSearch) -> Self {
        Self {
            market,
            search: Arc::new(search),
        }
    }
}
