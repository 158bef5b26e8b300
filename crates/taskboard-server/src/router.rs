//! Router assembly for the task façade HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax; path segments arrive
/// URL-decoded. CORS is permissive and TraceLayer provides request-level
/// logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/task", get(handlers::tasks::list_tasks))
        .route(
            "/task/{task_id}",
            get(handlers::tasks::get_task)
                .put(handlers::tasks::put_task)
                .delete(handlers::tasks::delete_task),
        )
        .route("/tasklist/{assignee}", get(handlers::tasklists::get_tasklist))
        .route("/search/{query}", get(handlers::search::search))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
