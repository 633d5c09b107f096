//! Interface definitions for the search index client.
//!
//! This module defines the abstract `IndexClient` trait that allows the broker
//! to be wired against any search backend, including mocks in tests.

mod index_client;

pub use index_client::IndexClient;
