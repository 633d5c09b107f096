//! Index client trait definition.
//!
//! This module defines the abstract interface the broker uses to create and
//! delete indices, allowing different backend implementations (OpenSearch,
//! Elasticsearch, in-memory mocks).

use async_trait::async_trait;

use crate::errors::IndexClientError;

/// Abstracts the underlying search engine the broker provisions indices on.
///
/// Implementations are injected into the broker to enable dependency injection
/// and easy testing with mock implementations. Transport lifecycle (connection
/// pooling, timeouts) belongs to the implementation.
///
/// Neither operation checks for existence first: creating an index that
/// already exists, or deleting one that does not, is reported as an error.
#[async_trait]
pub trait IndexClient: Send + Sync {
    /// Create an index with the given name.
    ///
    /// # Arguments
    ///
    /// * `name` - The index name
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the backend acknowledged the new index
    /// * `Err(IndexClientError)` - If the request failed or was rejected
    async fn create_index(&self, name: &str) -> Result<(), IndexClientError>;

    /// Delete the index with the given name.
    ///
    /// # Arguments
    ///
    /// * `name` - The index name
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the backend acknowledged the deletion
    /// * `Err(IndexClientError)` - If the request failed or was rejected
    async fn delete_index(&self, name: &str) -> Result<(), IndexClientError>;
}
