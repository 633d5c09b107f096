//! Error types for the service broker.
//!
//! Every failure a lifecycle operation runs into is normalized into a single
//! [`BrokerError`] carrying the original cause. The error is logged when it is
//! constructed, so callers only need to propagate it.

use std::error::Error as StdError;
use thiserror::Error;
use tracing::error;

/// Boxed cause carried by a [`BrokerError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A failed broker operation.
///
/// The hosting framework maps this single kind to its generic broker error
/// response. The original failure stays reachable through
/// [`std::error::Error::source`] or [`BrokerError::cause`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BrokerError {
    message: String,
    #[source]
    cause: BoxError,
}

/// An instance lacks a parameter an operation depends on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("instance {instance_id} has no {key} parameter")]
pub struct MissingParameterError {
    pub instance_id: String,
    pub key: String,
}

impl MissingParameterError {
    pub fn new(instance_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            key: key.into(),
        }
    }
}

impl BrokerError {
    /// Wrap a cause under an explicit message.
    pub fn new(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        let message = message.into();
        let cause = cause.into();
        error!(error = %message, cause = ?cause, "Broker operation failed");
        Self { message, cause }
    }

    /// Wrap a cause, reusing its own message.
    pub fn from_cause(cause: impl Into<BoxError>) -> Self {
        let cause = cause.into();
        let message = cause.to_string();
        Self::new(message, cause)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The failure this error wraps.
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.cause.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use es_broker_repository::IndexClientError;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_from_cause_uses_cause_message() {
        let err = BrokerError::from_cause(IndexClientError::connection("connection refused"));
        assert_eq!(err.message(), "Connection error: connection refused");
        assert_eq!(err.to_string(), "Connection error: connection refused");
    }

    #[test]
    fn test_new_keeps_explicit_message_and_cause() {
        let err = BrokerError::new(
            "could not create index",
            IndexClientError::index_creation("already exists"),
        );
        assert_eq!(err.to_string(), "could not create index");

        let cause = err
            .cause()
            .downcast_ref::<IndexClientError>()
            .expect("cause should be the original client error");
        assert!(matches!(cause, IndexClientError::IndexCreationError(_)));
    }

    #[test]
    fn test_source_is_original_cause() {
        let err = BrokerError::from_cause(IndexClientError::index_deletion("no such index"));
        let source = StdError::source(&err).expect("source should be set");
        assert_eq!(source.to_string(), "Index deletion error: no such index");
    }

    #[test]
    fn test_construction_logs_error() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            BrokerError::from_cause(IndexClientError::connection("connection refused"));
        });

        let output = logs.contents();
        assert!(output.contains("ERROR"));
        assert!(output.contains("Broker operation failed"));
        assert!(output.contains("connection refused"));
    }
}
