//! Task-list aggregate handlers.

use axum::extract::{Path, State};
use axum::Json;

use taskboard_backends::Entity;

use crate::error::ApiError;
use crate::state::{AppState, TASKLISTS_VIEW};

/// Fetches the per-assignee task aggregate from the tasklist view.
///
/// The aggregate's internal structure is the store's business and passes
/// through opaquely.
///
/// `GET /tasklist/{assignee}`
pub async fn get_tasklist(
    State(state): State<AppState>,
    Path(assignee): Path<String>,
) -> Result<Json<Entity>, ApiError> {
    let aggregate = state.store.get_entity(TASKLISTS_VIEW, &assignee).await?;
    Ok(Json(aggregate))
}
