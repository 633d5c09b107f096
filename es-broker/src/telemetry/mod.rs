//! Tracing initialization for hosts embedding the broker.

use std::env;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::SetupError;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "es_broker=info,es_broker_repository=info";

/// Initialize tracing/logging.
///
/// Emits JSON lines when `LOG_FORMAT=json`, pretty console output otherwise.
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), SetupError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init()
            .map_err(|e| SetupError::telemetry(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .try_init()
            .map_err(|e| SetupError::telemetry(e.to_string()))?;
    }

    info!(
        service_name = "es-broker",
        service_version = env!("CARGO_PKG_VERSION"),
        json,
        "Tracing initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // Whichever test installs the global subscriber first, a second install must fail
        let _ = init_tracing();
        assert!(matches!(init_tracing(), Err(SetupError::TelemetryError(_))));
    }
}
