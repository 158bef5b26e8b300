//! In-memory implementations of [`EntityStore`] and [`SearchIndex`].
//!
//! [`MemoryStore`] and [`MemoryIndex`] are first-class backends for tests
//! and offline development, mirroring the observable contract of the HTTP
//! backends: pipe posts upsert by `_id` (last write wins) and materialize
//! into the pipe's view, dataset reads filter soft-deleted entities on
//! request, and searches answer with the same response shape the real
//! index produces.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{json, Value};

use crate::entity::{self, Entity};
use crate::error::BackendError;
use crate::traits::{BackendResult, EntityStore, SearchIndex};

/// In-memory entity store keyed by dataset name, then entity id.
///
/// A post to pipe `p` writes into the dataset named `p` and into its
/// materialized view `p-view`, matching how the real store feeds views from
/// pipes. Other views (e.g. per-assignee aggregates) are store-side
/// transformations this fake does not model; tests populate them with
/// [`MemoryStore::seed`]. The `history` read flag is accepted and ignored:
/// only current versions are held.
#[derive(Debug, Default)]
pub struct MemoryStore {
    datasets: DashMap<String, DashMap<String, Entity>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entity directly into a dataset, bypassing the pipes.
    ///
    /// Stands in for the store-side materialization of derived views.
    pub fn seed(&self, dataset: &str, id: &str, entity: Entity) {
        self.upsert(dataset, id, entity);
    }

    fn upsert(&self, dataset: &str, id: &str, entity: Entity) {
        self.datasets
            .entry(dataset.to_string())
            .or_default()
            .insert(id.to_string(), entity);
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn get_entity(&self, dataset: &str, id: &str) -> BackendResult<Entity> {
        self.datasets
            .get(dataset)
            .and_then(|ds| ds.get(id).map(|entry| entry.value().clone()))
            .ok_or_else(|| BackendError::NotFound {
                dataset: dataset.to_string(),
                id: id.to_string(),
            })
    }

    async fn get_entities(
        &self,
        dataset: &str,
        _history: bool,
        deleted: bool,
    ) -> BackendResult<Vec<Entity>> {
        let entities = match self.datasets.get(dataset) {
            Some(ds) => ds
                .iter()
                .filter(|entry| deleted || !entity::is_deleted(entry.value()))
                .map(|entry| entry.value().clone())
                .collect(),
            None => Vec::new(),
        };
        Ok(entities)
    }

    async fn post_entities(&self, pipe: &str, entities: &[Entity]) -> BackendResult<()> {
        for item in entities {
            let Some(id) = entity::entity_id(item) else {
                return Err(BackendError::Upstream {
                    status: 400,
                    body: format!("entity posted to pipe '{}' has no _id", pipe),
                });
            };
            let id = id.to_string();
            self.upsert(pipe, &id, item.clone());
            self.upsert(&format!("{}-view", pipe), &id, item.clone());
        }
        Ok(())
    }
}

/// In-memory search index matching queries as case-insensitive substrings
/// of the indexed document JSON.
#[derive(Debug, Default)]
pub struct MemoryIndex {
    documents: DashMap<String, Value>,
}

impl MemoryIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes a document under the given id, replacing any previous one.
    pub fn index(&self, id: &str, document: Value) {
        self.documents.insert(id.to_string(), document);
    }
}

#[async_trait]
impl SearchIndex for MemoryIndex {
    async fn search(&self, query: &str) -> BackendResult<Value> {
        let needle = query.to_lowercase();
        let hits: Vec<Value> = self
            .documents
            .iter()
            .filter(|entry| entry.value().to_string().to_lowercase().contains(&needle))
            .map(|entry| json!({ "_id": entry.key(), "_source": entry.value() }))
            .collect();

        Ok(json!({
            "hits": {
                "total": { "value": hits.len() },
                "hits": hits,
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(value: Value) -> Entity {
        value.as_object().cloned().expect("test entity must be an object")
    }

    #[tokio::test]
    async fn pipe_post_upserts_by_id() {
        let store = MemoryStore::new();
        store
            .post_entities("tasks", &[task(json!({ "_id": "1", "title": "first" }))])
            .await
            .unwrap();
        store
            .post_entities("tasks", &[task(json!({ "_id": "1", "title": "second" }))])
            .await
            .unwrap();

        let stored = store.get_entity("tasks", "1").await.unwrap();
        assert_eq!(stored["title"], json!("second"));
        assert_eq!(store.get_entities("tasks", false, true).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn pipe_post_materializes_view() {
        let store = MemoryStore::new();
        store
            .post_entities("tasks", &[task(json!({ "_id": "1", "title": "first" }))])
            .await
            .unwrap();

        let view = store.get_entities("tasks-view", false, false).await.unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0]["_id"], json!("1"));
    }

    #[tokio::test]
    async fn filtered_read_skips_soft_deleted() {
        let store = MemoryStore::new();
        store
            .post_entities(
                "tasks",
                &[
                    task(json!({ "_id": "1", "title": "keep" })),
                    task(json!({ "_id": "2", "title": "drop", "_deleted": true })),
                ],
            )
            .await
            .unwrap();

        let visible = store.get_entities("tasks", false, false).await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0]["_id"], json!("1"));

        // Unfiltered reads still see the tombstone.
        let all = store.get_entities("tasks", false, true).await.unwrap();
        assert_eq!(all.len(), 2);
        let by_id = store.get_entity("tasks", "2").await.unwrap();
        assert!(entity::is_deleted(&by_id));
    }

    #[tokio::test]
    async fn missing_entity_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get_entity("tasks", "nope").await.unwrap_err();
        assert!(matches!(err, BackendError::NotFound { .. }));
    }

    #[tokio::test]
    async fn post_without_id_is_rejected() {
        let store = MemoryStore::new();
        let err = store
            .post_entities("tasks", &[task(json!({ "title": "no id" }))])
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Upstream { status: 400, .. }));
    }

    #[tokio::test]
    async fn empty_index_yields_zero_hits() {
        let index = MemoryIndex::new();
        let result = index.search("milk").await.unwrap();
        assert_eq!(result["hits"]["total"]["value"], json!(0));
        assert_eq!(result["hits"]["hits"], json!([]));
    }

    #[tokio::test]
    async fn search_matches_case_insensitive_substring() {
        let index = MemoryIndex::new();
        index.index("1", json!({ "title": "Buy Milk" }));
        index.index("2", json!({ "title": "walk the dog" }));

        let result = index.search("milk").await.unwrap();
        assert_eq!(result["hits"]["total"]["value"], json!(1));
        assert_eq!(result["hits"]["hits"][0]["_source"]["title"], json!("Buy Milk"));
    }
}
