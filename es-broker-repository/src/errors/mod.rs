//! Error types for the broker repository.
//!
//! This module provides a unified error type for all index client operations.

mod index_client_error;

pub use index_client_error::IndexClientError;
