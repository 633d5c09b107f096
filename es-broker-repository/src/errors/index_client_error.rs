//! Index client error types.
//!
//! This module defines the unified error type returned by every `IndexClient`
//! implementation, covering both transport failures and remote rejections.

use thiserror::Error;

/// Unified errors from index client operations.
///
/// Used by the `IndexClient` trait for index lifecycle operations. Remote
/// rejections (index already exists, index not found, ...) carry the HTTP
/// status and response body reported by the backend.
#[derive(Debug, Clone, Error)]
pub enum IndexClientError {
    /// Invalid input (e.g., an empty index name or a malformed URL).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failed to reach the search backend.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The backend rejected an index creation request.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// The backend rejected an index deletion request.
    #[error("Index deletion error: {0}")]
    IndexDeletionError(String),
}

impl IndexClientError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create an index deletion error.
    pub fn index_deletion(msg: impl Into<String>) -> Self {
        Self::IndexDeletionError(msg.into())
    }
}
