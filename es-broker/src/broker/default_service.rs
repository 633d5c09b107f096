//! No-op broker.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use super::ServiceBroker;
use crate::errors::BrokerError;
use crate::model::{ServiceBinding, ServiceInstance};

/// A broker whose every operation succeeds without doing anything.
///
/// Useful as a stand-in for services that need no provisioning, and as the
/// baseline hosts can delegate to for operations they do not support.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultService;

impl DefaultService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceBroker for DefaultService {
    async fn create_instance(&self, instance: &mut ServiceInstance) -> Result<(), BrokerError> {
        debug!(instance_id = %instance.id, "create_instance: nothing to do");
        Ok(())
    }

    async fn delete_instance(&self, instance: &ServiceInstance) -> Result<(), BrokerError> {
        debug!(instance_id = %instance.id, "delete_instance: nothing to do");
        Ok(())
    }

    async fn update_instance(&self, instance: &ServiceInstance) -> Result<(), BrokerError> {
        debug!(instance_id = %instance.id, "update_instance: nothing to do");
        Ok(())
    }

    async fn create_binding(
        &self,
        instance: &ServiceInstance,
        binding: &ServiceBinding,
    ) -> Result<(), BrokerError> {
        debug!(instance_id = %instance.id, binding_id = %binding.id, "create_binding: nothing to do");
        Ok(())
    }

    async fn delete_binding(
        &self,
        instance: &ServiceInstance,
        binding: &ServiceBinding,
    ) -> Result<(), BrokerError> {
        debug!(instance_id = %instance.id, binding_id = %binding.id, "delete_binding: nothing to do");
        Ok(())
    }

    async fn get_credentials(
        &self,
        _instance: &ServiceInstance,
        _binding: &ServiceBinding,
    ) -> Result<Map<String, Value>, BrokerError> {
        Ok(Map::new())
    }

    fn is_async(&self) -> bool {
        false
    }
}
