//! Backend error types.
//!
//! [`BackendError`] covers all anticipated failure modes when calling the
//! external collaborators: missing entities, non-success upstream answers,
//! transport failures, and malformed response bodies.

use thiserror::Error;

/// Errors produced by calls against the external backends.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The requested entity does not exist in the dataset.
    #[error("entity not found: dataset={dataset}, id={id}")]
    NotFound { dataset: String, id: String },

    /// A backend answered with a non-success status.
    #[error("upstream error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// The backend could not be reached.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend response was not the expected JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
