//! Broker that backs each service instance with one search index.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, instrument};

use super::credentials::index_name_text;
use super::{Credentials, ServiceBroker};
use crate::config::BrokerSettings;
use crate::errors::{BrokerError, MissingParameterError};
use crate::model::{ServiceBinding, ServiceInstance};
use es_broker_repository::IndexClient;

/// Instance parameter holding the name of the backing index.
pub const INDEX_NAME_KEY: &str = "indexName";

/// Provisions one index per service instance.
///
/// - create: creates the index named by the `indexName` parameter, defaulting
///   (and recording) it to the instance id
/// - delete: deletes the index named by `indexName`
/// - bind/unbind/update: logged only
/// - credentials: `indexName`, `host`, `port` and `uri` for the index
///
/// Neither create nor delete checks whether the index exists first; the
/// client's rejection is returned as a [`BrokerError`].
pub struct ElasticSearchBroker {
    settings: BrokerSettings,
    client: Arc<dyn IndexClient>,
}

impl ElasticSearchBroker {
    pub fn new(settings: BrokerSettings, client: Arc<dyn IndexClient>) -> Self {
        Self { settings, client }
    }

    pub fn settings(&self) -> &BrokerSettings {
        &self.settings
    }

    /// The instance's `indexName` parameter, if one has been recorded.
    ///
    /// An explicit JSON `null` counts as unset.
    fn index_value(instance: &ServiceInstance) -> Option<&Value> {
        instance
            .parameter(INDEX_NAME_KEY)
            .filter(|value| !value.is_null())
    }

    /// The instance's index name as used on the wire.
    fn index_name(instance: &ServiceInstance) -> Option<String> {
        Self::index_value(instance).map(index_name_text)
    }

    fn require_index_value(instance: &ServiceInstance) -> Result<&Value, BrokerError> {
        Self::index_value(instance).ok_or_else(|| {
            BrokerError::from_cause(MissingParameterError::new(&instance.id, INDEX_NAME_KEY))
        })
    }
}

#[async_trait]
impl ServiceBroker for ElasticSearchBroker {
    #[instrument(skip(self, instance), fields(instance_id = %instance.id))]
    async fn create_instance(&self, instance: &mut ServiceInstance) -> Result<(), BrokerError> {
        let index_name = match Self::index_name(instance) {
            Some(name) => name,
            None => {
                instance
                    .parameters
                    .insert(INDEX_NAME_KEY.to_string(), Value::String(instance.id.clone()));
                instance.id.clone()
            }
        };

        info!(index_name = %index_name, "Creating index");
        self.client
            .create_index(&index_name)
            .await
            .map_err(BrokerError::from_cause)
    }

    #[instrument(skip(self, instance), fields(instance_id = %instance.id))]
    async fn delete_instance(&self, instance: &ServiceInstance) -> Result<(), BrokerError> {
        let index_name = index_name_text(Self::require_index_value(instance)?);

        info!(index_name = %index_name, "Deleting index");
        self.client
            .delete_index(&index_name)
            .await
            .map_err(BrokerError::from_cause)
    }

    async fn update_instance(&self, instance: &ServiceInstance) -> Result<(), BrokerError> {
        info!(instance_id = %instance.id, "Updating instance: nothing to change");
        Ok(())
    }

    async fn create_binding(
        &self,
        instance: &ServiceInstance,
        binding: &ServiceBinding,
    ) -> Result<(), BrokerError> {
        info!(
            app_guid = ?binding.app_guid,
            index_name = ?Self::index_name(instance),
            "Binding app to index"
        );
        Ok(())
    }

    async fn delete_binding(
        &self,
        instance: &ServiceInstance,
        binding: &ServiceBinding,
    ) -> Result<(), BrokerError> {
        info!(
            app_guid = ?binding.app_guid,
            index_name = ?Self::index_name(instance),
            "Unbinding app from index"
        );
        Ok(())
    }

    async fn get_credentials(
        &self,
        instance: &ServiceInstance,
        _binding: &ServiceBinding,
    ) -> Result<Map<String, Value>, BrokerError> {
        info!(instance_id = %instance.id, "Returning credentials");

        let index_name = Self::require_index_value(instance)?.clone();
        let credentials =
            Credentials::new(index_name, &self.settings.host, &self.settings.port);
        Ok(credentials.into())
    }

    fn is_async(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_index_name_string_is_verbatim() {
        let instance = ServiceInstance::new("abc-123").with_parameter(INDEX_NAME_KEY, "logs");
        assert_eq!(
            ElasticSearchBroker::index_name(&instance).as_deref(),
            Some("logs")
        );
    }

    #[test]
    fn test_index_name_non_string_renders_json() {
        let instance = ServiceInstance::new("abc-123").with_parameter(INDEX_NAME_KEY, json!(42));
        assert_eq!(ElasticSearchBroker::index_name(&instance).as_deref(), Some("42"));
    }

    #[test]
    fn test_index_name_missing() {
        let instance = ServiceInstance::new("abc-123");
        assert!(ElasticSearchBroker::index_name(&instance).is_none());
        assert!(ElasticSearchBroker::require_index_value(&instance).is_err());
    }

    #[test]
    fn test_index_name_null_is_unset() {
        let instance = ServiceInstance::new("abc-123").with_parameter(INDEX_NAME_KEY, Value::Null);
        assert!(ElasticSearchBroker::index_name(&instance).is_none());
        assert!(ElasticSearchBroker::require_index_value(&instance).is_err());
    }
}
