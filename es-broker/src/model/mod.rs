//! Records the hosting framework hands to the broker.
//!
//! Both records are created and persisted by the host; the broker only reads
//! them, except for `create_instance`, which may inject the `indexName`
//! parameter. Field names follow the Open Service Broker API request bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A provisioned service instance (one search index).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceInstance {
    /// Platform-assigned instance identifier.
    pub id: String,
    /// Catalog service the instance was provisioned from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    /// Catalog plan the instance was provisioned from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    /// Owning organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_guid: Option<String>,
    /// Owning space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_guid: Option<String>,
    /// Free-form parameters supplied with the provision request.
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl ServiceInstance {
    /// Create an instance record with no parameters.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set a parameter, returning the updated record.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Look up a parameter by key.
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }
}

/// An association between a consuming application and an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceBinding {
    /// Platform-assigned binding identifier.
    pub id: String,
    /// The application being bound, when the binding targets an app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    /// Free-form parameters supplied with the bind request.
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl ServiceBinding {
    /// Create a binding record with no app and no parameters.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the bound application, returning the updated record.
    pub fn with_app_guid(mut self, app_guid: impl Into<String>) -> Self {
        self.app_guid = Some(app_guid.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_instance_deserializes_from_provision_body() {
        let instance: ServiceInstance = serde_json::from_value(json!({
            "id": "abc-123",
            "service_id": "elasticsearch",
            "plan_id": "standard",
            "organization_guid": "org",
            "space_guid": "space",
            "parameters": { "indexName": "logs" }
        }))
        .unwrap();

        assert_eq!(instance.id, "abc-123");
        assert_eq!(instance.plan_id.as_deref(), Some("standard"));
        assert_eq!(instance.parameter("indexName"), Some(&json!("logs")));
    }

    #[test]
    fn test_instance_parameters_default_to_empty() {
        let instance: ServiceInstance = serde_json::from_value(json!({ "id": "abc-123" })).unwrap();
        assert!(instance.parameters.is_empty());
        assert_eq!(instance, ServiceInstance::new("abc-123"));
    }

    #[test]
    fn test_binding_builder() {
        let binding = ServiceBinding::new("b-1").with_app_guid("app-1");
        assert_eq!(binding.app_guid.as_deref(), Some("app-1"));
        assert!(binding.parameters.is_empty());
    }
}
