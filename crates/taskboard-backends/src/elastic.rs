//! HTTP client for an Elasticsearch-style search API.
//!
//! [`ElasticIndex`] implements [`SearchIndex`] by posting a
//! `simple_query_string` query to the backend's `_search` endpoint across
//! all indices and passing the response document through unmodified.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::BackendError;
use crate::traits::{BackendResult, SearchIndex};

const DEFAULT_HOST: &str = "http://localhost:9200";

/// Search client speaking the Elasticsearch `_search` API.
#[derive(Debug, Clone)]
pub struct ElasticIndex {
    client: reqwest::Client,
    hosts: Vec<String>,
}

impl ElasticIndex {
    /// Creates a search client from a comma-separated host list
    /// (e.g. `localhost:9200` or `https://es1:9200,https://es2:9200`).
    ///
    /// Hosts without a scheme are assumed to speak plain HTTP. Requests go
    /// to the first host; spreading load across hosts is the backend's
    /// concern, not this client's.
    pub fn new(hosts: &str) -> Self {
        let mut hosts: Vec<String> = hosts
            .split(',')
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .map(normalize_host)
            .collect();
        if hosts.is_empty() {
            hosts.push(DEFAULT_HOST.to_string());
        }
        ElasticIndex {
            client: reqwest::Client::new(),
            hosts,
        }
    }
}

/// Prepends `http://` to hosts given without a scheme and strips any
/// trailing slash.
fn normalize_host(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

#[async_trait]
impl SearchIndex for ElasticIndex {
    async fn search(&self, query: &str) -> BackendResult<Value> {
        let url = format!("{}/_search", self.hosts[0]);
        let body = json!({
            "query": {
                "simple_query_string": {
                    "query": query,
                }
            }
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            // Malformed query syntax surfaces here as the backend's own
            // error body, passed through to the caller.
            return Err(BackendError::Upstream {
                status: status.as_u16(),
                body: text,
            });
        }

        let document: Value = serde_json::from_str(&text)?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_host_adds_scheme_when_missing() {
        assert_eq!(normalize_host("localhost:9200"), "http://localhost:9200");
        assert_eq!(normalize_host("http://es:9200"), "http://es:9200");
        assert_eq!(normalize_host("https://es:9200/"), "https://es:9200");
    }

    #[test]
    fn new_splits_comma_separated_hosts() {
        let index = ElasticIndex::new("es1:9200, https://es2:9200");
        assert_eq!(index.hosts, vec!["http://es1:9200", "https://es2:9200"]);
    }

    #[test]
    fn new_falls_back_to_default_host() {
        let index = ElasticIndex::new("");
        assert_eq!(index.hosts, vec![DEFAULT_HOST]);
    }
}
