//! Binary entrypoint for the task façade HTTP server.
//!
//! Reads configuration from environment variables:
//! - `SESAM_URL`: base URL of the entity-store API (default "http://localhost:9042/api/")
//! - `ELASTICSEARCH_HOSTS`: search backend host(s) (default "localhost:9200")
//! - `TASKBOARD_PORT`: server listen port (default "5000")

use taskboard_server::config::Config;
use taskboard_server::router::build_router;
use taskboard_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let state = AppState::from_config(&config);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("taskboard server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
