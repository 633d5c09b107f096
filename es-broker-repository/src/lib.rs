//! # Elasticsearch Broker Repository
//!
//! This crate provides the index-level client used by the service broker.
//! It includes the error type, the `IndexClient` interface, and a concrete
//! implementation that talks to an OpenSearch/Elasticsearch cluster over REST.

pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use errors::IndexClientError;
pub use interfaces::IndexClient;
pub use opensearch::OpenSearchIndexClient;
