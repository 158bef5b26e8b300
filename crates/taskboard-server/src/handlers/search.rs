//! Free-text search handler.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Runs a simple-query-string search and returns the raw backend response.
///
/// The path segment arrives URL-decoded from the router. Malformed query
/// syntax is the backend's to report; its error passes through as an
/// upstream failure.
///
/// `GET /search/{query}`
pub async fn search(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let results = state.search.search(&query).await?;
    Ok(Json(results))
}
