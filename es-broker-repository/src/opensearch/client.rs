//! OpenSearch index client implementation.
//!
//! This module provides the concrete implementation of `IndexClient`
//! using the OpenSearch Rust crate.

use async_trait::async_trait;
use opensearch::{
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesDeleteParts},
    OpenSearch,
};
use tracing::{debug, error, info};
use url::Url;

use crate::errors::IndexClientError;
use crate::interfaces::IndexClient;

/// OpenSearch-backed index client.
///
/// Issues `PUT /{index}` and `DELETE /{index}` against a single node. The
/// connection pool and HTTP transport are owned by the underlying client.
///
/// # Example
///
/// ```no_run
/// use es_broker_repository::{IndexClient, OpenSearchIndexClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OpenSearchIndexClient::new("http://localhost:9200")?;
/// client.create_index("logs").await?;
/// client.delete_index("logs").await?;
/// # Ok(())
/// # }
/// ```
pub struct OpenSearchIndexClient {
    client: OpenSearch,
}

impl OpenSearchIndexClient {
    /// Create a new index client for the specified URL.
    ///
    /// No request is sent here; connectivity problems surface on the first
    /// index operation.
    ///
    /// # Arguments
    ///
    /// * `url` - The cluster URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchIndexClient)` - A new client instance
    /// * `Err(IndexClientError)` - If the URL is invalid or the transport cannot be built
    pub fn new(url: &str) -> Result<Self, IndexClientError> {
        let parsed_url = Url::parse(url)
            .map_err(|e| IndexClientError::validation(format!("Invalid url '{}': {}", url, e)))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| IndexClientError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, "Created OpenSearch index client");

        Ok(Self { client })
    }

    /// Reject names the REST path cannot address.
    fn validate_index_name(name: &str) -> Result<(), IndexClientError> {
        if name.is_empty() {
            return Err(IndexClientError::validation("Index name cannot be empty"));
        }
        Ok(())
    }
}

#[async_trait]
impl IndexClient for OpenSearchIndexClient {
    async fn create_index(&self, name: &str) -> Result<(), IndexClientError> {
        Self::validate_index_name(name)?;

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(name))
            .send()
            .await
            .map_err(|e| IndexClientError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(index = %name, status = %status, body = %error_body, "Create index request failed");
            return Err(IndexClientError::index_creation(format!(
                "Create index '{}' failed with status {}: {}",
                name, status, error_body
            )));
        }

        debug!(index = %name, "Index created");
        Ok(())
    }

    async fn delete_index(&self, name: &str) -> Result<(), IndexClientError> {
        Self::validate_index_name(name)?;

        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| IndexClientError::connection(e.to_string()))?;

        // 404 is reported too: the broker does not treat a missing index as deleted
        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(index = %name, status = %status, body = %error_body, "Delete index request failed");
            return Err(IndexClientError::index_deletion(format!(
                "Delete index '{}' failed with status {}: {}",
                name, status, error_body
            )));
        }

        debug!(index = %name, "Index deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_valid_url() {
        assert!(OpenSearchIndexClient::new("http://localhost:9200").is_ok());
    }

    #[test]
    fn test_new_with_invalid_url() {
        let result = OpenSearchIndexClient::new("not a url");
        assert!(matches!(
            result.err(),
            Some(IndexClientError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_index_name() {
        assert!(OpenSearchIndexClient::validate_index_name("logs").is_ok());
        assert!(OpenSearchIndexClient::validate_index_name("abc-123").is_ok());
        assert!(matches!(
            OpenSearchIndexClient::validate_index_name(""),
            Err(IndexClientError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_create_index_rejects_empty_name_without_request() {
        // Port 9 is discard; an actual request would fail with a connection error instead
        let client = OpenSearchIndexClient::new("http://127.0.0.1:9").unwrap();
        let result = client.create_index("").await;
        assert!(matches!(result, Err(IndexClientError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_delete_index_rejects_empty_name_without_request() {
        let client = OpenSearchIndexClient::new("http://127.0.0.1:9").unwrap();
        let result = client.delete_index("").await;
        assert!(matches!(result, Err(IndexClientError::ValidationError(_))));
    }
}
