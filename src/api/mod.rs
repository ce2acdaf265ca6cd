//! Axum HTTP handlers: search endpoints and document serving.

pub mod documents;
pub mod search;
