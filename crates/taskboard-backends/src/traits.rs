//! The [`EntityStore`] and [`SearchIndex`] traits defining the contracts
//! consumed from the two external collaborators.
//!
//! Both traits are object-safe and consumed as `Arc<dyn ...>`, so the
//! HTTP-backed clients and the in-memory implementations are fully
//! swappable without changing handler code.

use async_trait::async_trait;
use serde_json::Value;

use crate::entity::Entity;
use crate::error::BackendError;

/// Result alias for backend operations.
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Contract of the entity-pipeline store.
///
/// Datasets are read-only projections owned by the store; writes go through
/// named pipes that apply batches of entities as upserts or soft-deletes.
/// The store's own write-ordering semantics decide the outcome of
/// concurrent posts for the same `_id`.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Fetches a single entity by id from a named dataset.
    ///
    /// No history or soft-delete filtering is applied: a soft-deleted
    /// entity is returned with its marker set.
    async fn get_entity(&self, dataset: &str, id: &str) -> BackendResult<Entity>;

    /// Fetches all entities from a named dataset.
    ///
    /// `history` includes historical revisions, `deleted` includes entities
    /// whose soft-delete marker is set. Result order is whatever the store
    /// returns.
    async fn get_entities(
        &self,
        dataset: &str,
        history: bool,
        deleted: bool,
    ) -> BackendResult<Vec<Entity>>;

    /// Posts a batch of entities to a named write pipe.
    ///
    /// The store applies the batch as upserts keyed by `_id`; entities with
    /// the soft-delete marker set stay stored but drop out of filtered
    /// reads. Success is an acknowledgement only.
    async fn post_entities(&self, pipe: &str, entities: &[Entity]) -> BackendResult<()>;
}

/// Contract of the full-text search backend.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Runs a simple free-text query against the default index and returns
    /// the raw response document, unmodified.
    async fn search(&self, query: &str) -> BackendResult<Value>;
}
