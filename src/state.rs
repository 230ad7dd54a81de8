//! Application state management
//!
//! Shared application state passed to request handlers via Axum's
//! State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{config::Config, db::RecordStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Statement execution layer over the connection pool
    pub store: RecordStore,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(pool: PgPool, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: RecordStore::new(pool),
                config,
            }),
        }
    }

    /// Get a reference to the record store
    pub fn store(&self) -> &RecordStore {
        &self.inner.store
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
