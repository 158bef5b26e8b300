//! Task CRUD handlers.
//!
//! All task state lives in the external store: single reads go to the
//! `tasks` dataset, listings to its `tasks-view` projection, and writes are
//! posted to the `tasks` pipe. Handlers never merge payloads with stored
//! versions and never validate beyond the reserved fields.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use taskboard_backends::entity::{self, Entity};

use crate::error::ApiError;
use crate::state::{AppState, TASKS_DATASET, TASKS_PIPE, TASKS_VIEW};

/// Fetches a single task by id, soft-deleted ones included.
///
/// `GET /task/{task_id}`
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Entity>, ApiError> {
    let task = state.store.get_entity(TASKS_DATASET, &task_id).await?;
    Ok(Json(task))
}

/// Replaces a task wholesale under the id given in the path.
///
/// The body must be a JSON object; its `_id` is overwritten with the
/// path's task id before the entity is posted to the write pipe. The
/// stored version, if any, is not read or merged.
///
/// `PUT /task/{task_id}`
pub async fn put_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Entity>, ApiError> {
    let Value::Object(mut task) = body else {
        return Err(ApiError::BadRequest(
            "task body must be a JSON object".to_string(),
        ));
    };
    entity::set_id(&mut task, &task_id);
    state
        .store
        .post_entities(TASKS_PIPE, std::slice::from_ref(&task))
        .await?;
    Ok(Json(task))
}

/// Soft-deletes a task: fetches it, sets the delete marker, resubmits the
/// full entity, and echoes the marked entity.
///
/// `DELETE /task/{task_id}`
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Entity>, ApiError> {
    let mut task = state.store.get_entity(TASKS_DATASET, &task_id).await?;
    entity::mark_deleted(&mut task);
    state
        .store
        .post_entities(TASKS_PIPE, std::slice::from_ref(&task))
        .await?;
    Ok(Json(task))
}

/// Lists all non-deleted, non-historical tasks, in store order.
///
/// `GET /task`
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Entity>>, ApiError> {
    let tasks = state.store.get_entities(TASKS_VIEW, false, false).await?;
    Ok(Json(tasks))
}
