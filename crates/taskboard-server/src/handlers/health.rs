//! Liveness probe.

use axum::Json;
use serde_json::{json, Value};

/// Reports process liveness. Performs no backend calls, so it answers even
/// when the store or the search index is down.
///
/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
