//! Connection settings for the search cluster the broker provisions on.

use std::env;
use url::Url;

use crate::SetupError;

/// Hostname or IP handed out in credentials.
pub const ELASTIC_HOST_VAR: &str = "ELASTIC_HOST";

/// Port handed out in credentials.
pub const ELASTIC_PORT_VAR: &str = "ELASTIC_PORT";

/// Optional URL the index client connects to.
pub const ELASTIC_URL_VAR: &str = "ELASTIC_URL";

/// Search cluster settings.
///
/// `host` and `port` are what bound applications receive. `url` lets the
/// broker reach the cluster through a different address (e.g. an internal
/// name) and defaults to `http://{host}:{port}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerSettings {
    pub host: String,
    /// Kept as text; it is only ever echoed into credentials.
    pub port: String,
    pub url: Option<String>,
}

impl BrokerSettings {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            url: None,
        }
    }

    /// Override the URL the index client connects to.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Load settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTIC_HOST`: search engine hostname/IP (required)
    /// - `ELASTIC_PORT`: search engine port (required)
    /// - `ELASTIC_URL`: client connection URL (default: `http://{ELASTIC_HOST}:{ELASTIC_PORT}`)
    ///
    /// # Returns
    ///
    /// * `Ok(BrokerSettings)` - Loaded settings
    /// * `Err(SetupError)` - If a required variable is missing or the URL is invalid
    pub fn from_env() -> Result<Self, SetupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SetupError> {
        let host = lookup(ELASTIC_HOST_VAR)
            .ok_or_else(|| SetupError::config(format!("{} is not set", ELASTIC_HOST_VAR)))?;
        let port = lookup(ELASTIC_PORT_VAR)
            .ok_or_else(|| SetupError::config(format!("{} is not set", ELASTIC_PORT_VAR)))?;

        let mut settings = Self::new(host, port);
        if let Some(url) = lookup(ELASTIC_URL_VAR) {
            settings = settings.with_url(url);
        }

        Url::parse(&settings.base_url()).map_err(|e| {
            SetupError::config(format!(
                "Invalid search cluster url '{}': {}",
                settings.base_url(),
                e
            ))
        })?;

        Ok(settings)
    }

    /// The URL the index client connects to.
    pub fn base_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("http://{}:{}", self.host, self.port),
        }
    }
}
