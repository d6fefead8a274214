//! Application state for the climate API.

use anyhow::Result;
use std::sync::Arc;

use storage::ClimateStore;

/// Shared application state.
pub struct AppState {
    /// Read-only climate snapshot store.
    pub store: Arc<ClimateStore>,
}

impl AppState {
    /// Create a new AppState from environment configuration.
    pub async fn new() -> Result<Self> {
        // Get database URL; the snapshot is opened read-only
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://data/climate.sqlite?mode=ro".to_string());

        let store = Arc::new(ClimateStore::connect(&database_url).await?);

        Ok(Self { store })
    }

    /// Build state around an already-connected store. Used by tests.
    pub fn with_store(store: Arc<ClimateStore>) -> Self {
        Self { store }
    }
}
