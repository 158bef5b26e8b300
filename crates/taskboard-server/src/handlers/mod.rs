//! HTTP handler modules for the task façade API.
//!
//! Each sub-module implements thin handlers that parse requests, delegate
//! a single call to the injected backends, and return JSON responses. No
//! business logic lives in handlers.

pub mod health;
pub mod search;
pub mod tasklists;
pub mod tasks;
