//! HTTP client for a Sesam-style entity-pipeline API.
//!
//! [`SesamStore`] implements [`EntityStore`] against the store's REST
//! surface: dataset reads under `datasets/{dataset}/entities`, batch writes
//! to the pipe receiver under `receivers/{pipe}/entities`.

use async_trait::async_trait;

use crate::entity::Entity;
use crate::error::BackendError;
use crate::traits::{BackendResult, EntityStore};

/// Entity-store client speaking the Sesam REST API.
///
/// Cheap to clone: the underlying reqwest client shares one connection
/// pool. Constructed once at process start and held for the process
/// lifetime.
#[derive(Debug, Clone)]
pub struct SesamStore {
    client: reqwest::Client,
    base_url: String,
}

impl SesamStore {
    /// Creates a store client rooted at `base_url`
    /// (e.g. `http://localhost:9042/api/`).
    pub fn new(base_url: &str) -> Self {
        SesamStore {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl EntityStore for SesamStore {
    async fn get_entity(&self, dataset: &str, id: &str) -> BackendResult<Entity> {
        let url = self.endpoint(&format!("datasets/{}/entities/{}", dataset, id));
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound {
                dataset: dataset.to_string(),
                id: id.to_string(),
            });
        }
        let body = response.text().await?;
        if !status.is_success() {
            return Err(BackendError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let entity: Entity = serde_json::from_str(&body)?;
        Ok(entity)
    }

    async fn get_entities(
        &self,
        dataset: &str,
        history: bool,
        deleted: bool,
    ) -> BackendResult<Vec<Entity>> {
        let url = self.endpoint(&format!("datasets/{}/entities", dataset));
        let response = self
            .client
            .get(&url)
            .query(&[("history", history), ("deleted", deleted)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(BackendError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let entities: Vec<Entity> = serde_json::from_str(&body)?;
        Ok(entities)
    }

    async fn post_entities(&self, pipe: &str, entities: &[Entity]) -> BackendResult<()> {
        let url = self.endpoint(&format!("receivers/{}/entities", pipe));
        let response = self.client.post(&url).json(entities).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(BackendError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_join_tolerates_trailing_slash() {
        let with_slash = SesamStore::new("http://localhost:9042/api/");
        let without_slash = SesamStore::new("http://localhost:9042/api");
        assert_eq!(
            with_slash.endpoint("datasets/tasks/entities/42"),
            "http://localhost:9042/api/datasets/tasks/entities/42"
        );
        assert_eq!(
            without_slash.endpoint("datasets/tasks/entities/42"),
            "http://localhost:9042/api/datasets/tasks/entities/42"
        );
    }
}
