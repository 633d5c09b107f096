//! Configuration and dependency wiring for the broker.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{BrokerSettings, ELASTIC_HOST_VAR, ELASTIC_PORT_VAR, ELASTIC_URL_VAR};
