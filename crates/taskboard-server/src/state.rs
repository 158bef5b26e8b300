//! Application state holding the two injected backend clients.
//!
//! [`AppState`] is cheap to clone: both collaborators sit behind `Arc`
//! trait objects, constructed once at startup. Tests substitute the
//! in-memory backends for the HTTP-backed clients through [`AppState::new`].

use std::sync::Arc;

use taskboard_backends::{ElasticIndex, EntityStore, SearchIndex, SesamStore};

use crate::config::Config;

/// Dataset holding current task entities.
pub const TASKS_DATASET: &str = "tasks";

/// Write pipe accepting task upserts and soft-deletes.
pub const TASKS_PIPE: &str = "tasks";

/// View of non-deleted, non-historical tasks.
pub const TASKS_VIEW: &str = "tasks-view";

/// View of per-assignee task aggregates.
pub const TASKLISTS_VIEW: &str = "tasklists-view";

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The entity-pipeline store.
    pub store: Arc<dyn EntityStore>,
    /// The full-text search backend.
    pub search: Arc<dyn SearchIndex>,
}

impl AppState {
    /// Creates state over the given collaborators.
    pub fn new(store: Arc<dyn EntityStore>, search: Arc<dyn SearchIndex>) -> Self {
        AppState { store, search }
    }

    /// Creates state with HTTP-backed clients from configuration.
    pub fn from_config(config: &Config) -> Self {
        AppState::new(
            Arc::new(SesamStore::new(&config.sesam_url)),
            Arc::new(ElasticIndex::new(&config.elasticsearch_hosts)),
        )
    }
}
