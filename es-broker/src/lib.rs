//! # Elasticsearch Service Broker
//!
//! A service broker plugin that provisions one Elasticsearch index per
//! service instance and hands bound applications the credentials to reach it.
//!
//! ## Architecture
//!
//! A hosting broker framework owns the HTTP API, the catalog and record
//! persistence. It calls into this crate through the [`ServiceBroker`] trait:
//!
//! 1. **Broker**: translates lifecycle calls into index operations
//! 2. **Index client**: creates and deletes indices (`es-broker-repository`)
//! 3. **Errors**: every failure reaches the host as one [`BrokerError`]
//!
//! ## Modules
//!
//! - [`broker`]: the lifecycle trait and its implementations
//! - [`config`]: settings and dependency wiring
//! - [`errors`]: the broker error wrapper
//! - [`model`]: instance and binding records
//! - [`telemetry`]: tracing setup for hosts

pub mod broker;
pub mod config;
pub mod errors;
pub mod model;
pub mod telemetry;

pub use broker::{Credentials, DefaultService, ElasticSearchBroker, ServiceBroker, INDEX_NAME_KEY};
pub use config::{BrokerSettings, Dependencies};
pub use errors::BrokerError;
pub use model::{ServiceBinding, ServiceInstance};
pub use telemetry::init_tracing;

use es_broker_repository::IndexClientError;
use thiserror::Error;

/// Errors that can occur while wiring the broker.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The index client could not be built.
    #[error("Index client error: {0}")]
    Client(#[from] IndexClientError),

    /// Tracing could not be initialized.
    #[error("Telemetry error: {0}")]
    TelemetryError(String),
}

impl SetupError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a telemetry error.
    pub fn telemetry(msg: impl Into<String>) -> Self {
        Self::TelemetryError(msg.into())
    }
}
