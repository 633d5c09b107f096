//! Dependency initialization and wiring for the broker.

use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;

use crate::broker::ElasticSearchBroker;
use crate::config::BrokerSettings;
use crate::SetupError;
use es_broker_repository::{IndexClient, OpenSearchIndexClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The broker, ready to be registered with a hosting framework.
    pub broker: ElasticSearchBroker,
}

impl Dependencies {
    /// Initialize all dependencies from the environment.
    ///
    /// Loads a `.env` file when present, then reads [`BrokerSettings`] and
    /// builds an OpenSearch index client against [`BrokerSettings::base_url`].
    /// No request is sent to the cluster here.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(SetupError)` - If configuration is missing or the client cannot be built
    pub fn from_env() -> Result<Self, SetupError> {
        dotenv().ok();

        let settings = BrokerSettings::from_env()?;
        Self::new(settings)
    }

    /// Wire dependencies from explicit settings.
    pub fn new(settings: BrokerSettings) -> Result<Self, SetupError> {
        let base_url = settings.base_url();

        info!(
            elastic_host = %settings.host,
            elastic_port = %settings.port,
            base_url = %base_url,
            "Initializing dependencies"
        );

        let client: Arc<dyn IndexClient> = Arc::new(OpenSearchIndexClient::new(&base_url)?);
        let broker = ElasticSearchBroker::new(settings, client);

        Ok(Self { broker })
    }
}
