//! Environment-variable configuration for the server binary.

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the entity-store API.
    pub sesam_url: String,
    /// Comma-separated host list of the search backend.
    pub elasticsearch_hosts: String,
    /// HTTP listen port.
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment, defaulting to a local
    /// development setup:
    /// - `SESAM_URL` (default `http://localhost:9042/api/`)
    /// - `ELASTICSEARCH_HOSTS` (default `localhost:9200`)
    /// - `TASKBOARD_PORT` (default `5000`)
    pub fn from_env() -> Self {
        let sesam_url = std::env::var("SESAM_URL")
            .unwrap_or_else(|_| "http://localhost:9042/api/".to_string());
        let elasticsearch_hosts = std::env::var("ELASTICSEARCH_HOSTS")
            .unwrap_or_else(|_| "localhost:9200".to_string());
        let port = std::env::var("TASKBOARD_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(5000);

        Config {
            sesam_url,
            elasticsearch_hosts,
            port,
        }
    }
}
