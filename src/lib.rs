pub mod config;
pub mod rest;
pub mod store;

use std::sync::Arc;
use std::time::Instant;

use config::ServerConfig;
use store::TaskStore;

/// Shared application state passed to every REST handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    /// The in-memory task store. Owned here and injected into handlers via
    /// axum `State` — never a module-level global.
    pub store: Arc<TaskStore>,
    pub started_at: Instant,
}

impl AppContext {
    /// Context for a fresh daemon: seeded store, clock started now.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, TaskStore::seeded())
    }

    /// Context with an explicit store — for tests that need to start from an
    /// empty or hand-built store.
    pub fn with_store(config: ServerConfig, store: TaskStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            started_at: Instant::now(),
        }
    }
}
