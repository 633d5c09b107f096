//! OpenSearch implementation of the index client.
//!
//! The `opensearch` crate speaks the same index REST endpoints as
//! Elasticsearch, so this client serves both backends.

mod client;

pub use client::OpenSearchIndexClient;
