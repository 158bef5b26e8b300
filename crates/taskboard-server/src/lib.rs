//! HTTP/JSON façade forwarding task CRUD to an entity-pipeline store and
//! free-text search to a search index.
//!
//! Every route is a one-to-one translation from an HTTP request to a single
//! call against one of the two injected backends; the only write logic is
//! marking a record deleted before resubmission. This crate contains the
//! server framework, error handling, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
