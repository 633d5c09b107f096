//! Bind credentials handed to applications.

use serde::Serialize;
use serde_json::{Map, Value};

/// Connection details for one index.
///
/// Serialized with the keys `indexName`, `host`, `port` and `uri`, which is
/// the shape bound applications read from their environment. `index_name`
/// keeps the parameter value as supplied, so a numeric name stays numeric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub index_name: Value,
    pub host: String,
    pub port: String,
    pub uri: String,
}

impl Credentials {
    /// Build credentials; `uri` is `http://{host}:{port}/{index_name}` with no escaping.
    pub fn new(
        index_name: impl Into<Value>,
        host: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        let index_name = index_name.into();
        let host = host.into();
        let port = port.into();
        let uri = format!("http://{}:{}/{}", host, port, index_name_text(&index_name));
        Self {
            index_name,
            host,
            port,
            uri,
        }
    }
}

/// Render an `indexName` parameter as the name used on the wire.
///
/// Strings are used verbatim; any other JSON value becomes its JSON text.
pub(crate) fn index_name_text(value: &Value) -> String {
    match value {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}

impl From<Credentials> for Map<String, Value> {
    fn from(credentials: Credentials) -> Self {
        let mut map = Map::new();
        map.insert("indexName".to_string(), credentials.index_name);
        map.insert("host".to_string(), Value::String(credentials.host));
        map.insert("port".to_string(), Value::String(credentials.port));
        map.insert("uri".to_string(), Value::String(credentials.uri));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uri_format() {
        let credentials = Credentials::new("logs", "es.local", "9200");
        assert_eq!(credentials.uri, "http://es.local:9200/logs");
    }

    #[test]
    fn test_uri_does_not_escape_index_name() {
        let credentials = Credentials::new("my index/#1", "10.0.0.5", "9243");
        assert_eq!(credentials.uri, "http://10.0.0.5:9243/my index/#1");
    }

    #[test]
    fn test_numeric_index_name_kept_as_number() {
        let credentials = Credentials::new(json!(42), "es.local", "9200");
        assert_eq!(credentials.uri, "http://es.local:9200/42");

        let map: Map<String, Value> = credentials.into();
        assert_eq!(map["indexName"], json!(42));
    }

    #[test]
    fn test_map_matches_serialized_form() {
        let credentials = Credentials::new("logs", "es.local", "9200");
        let serialized = serde_json::to_value(&credentials).unwrap();
        let map: Map<String, Value> = credentials.into();

        assert_eq!(Value::Object(map.clone()), serialized);
        assert_eq!(
            Value::Object(map),
            json!({
                "indexName": "logs",
                "host": "es.local",
                "port": "9200",
                "uri": "http://es.local:9200/logs"
            })
        );
    }
}
