//! Shared application state.

use std::time::Instant;

use retail_store::{SharedStore, StoreConfig};

use crate::config::ApiConfig;

/// State handed to every handler through axum `State`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub started_at: Instant,
}

impl AppState {
    /// Creates the state for a fresh process, seeding the store if configured.
    pub fn new(config: &ApiConfig) -> Self {
        let store_config = StoreConfig::default().seed_demo_data(config.seed_demo_data);
        Self::with_store(SharedStore::new(store_config))
    }

    /// Creates state around an existing store.
    pub fn with_store(store: SharedStore) -> Self {
        AppState {
            store,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was created.
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
