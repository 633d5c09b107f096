//! Service broker lifecycle.
//!
//! A hosting broker framework drives provisioning through the
//! [`ServiceBroker`] trait: it loads the instance and binding records, calls
//! one lifecycle method, then persists the (possibly mutated) records and
//! renders the result or error. Implementations hold no state between calls.

mod credentials;
mod default_service;
mod elastic_search;

pub use credentials::Credentials;
pub use default_service::DefaultService;
pub use elastic_search::{ElasticSearchBroker, INDEX_NAME_KEY};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::BrokerError;
use crate::model::{ServiceBinding, ServiceInstance};

/// Lifecycle callbacks a hosting broker framework invokes.
///
/// Every method completes before returning; implementations that report
/// `is_async() == false` never leave an operation in progress for the
/// platform to poll.
#[async_trait]
pub trait ServiceBroker: Send + Sync {
    /// Provision resources for a new instance.
    ///
    /// The instance is mutable so implementations can record derived
    /// parameters for the host to persist alongside it.
    async fn create_instance(&self, instance: &mut ServiceInstance) -> Result<(), BrokerError>;

    /// Release the resources behind an instance.
    async fn delete_instance(&self, instance: &ServiceInstance) -> Result<(), BrokerError>;

    /// Apply a plan or parameter change to an instance.
    async fn update_instance(&self, instance: &ServiceInstance) -> Result<(), BrokerError>;

    /// Prepare anything an application needs before receiving credentials.
    async fn create_binding(
        &self,
        instance: &ServiceInstance,
        binding: &ServiceBinding,
    ) -> Result<(), BrokerError>;

    /// Tear down whatever `create_binding` set up.
    async fn delete_binding(
        &self,
        instance: &ServiceInstance,
        binding: &ServiceBinding,
    ) -> Result<(), BrokerError>;

    /// Credentials returned to the platform once a binding is created.
    async fn get_credentials(
        &self,
        instance: &ServiceInstance,
        binding: &ServiceBinding,
    ) -> Result<Map<String, Value>, BrokerError>;

    /// Whether operations complete asynchronously and must be polled.
    fn is_async(&self) -> bool;
}
