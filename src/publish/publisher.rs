use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while sending an export somewhere.
#[derive(Debug)]
pub enum PublishError {
    /// Publisher misconfigured (bad URL, client could not be built).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint answered with a non-success status.
    Api { status: u16, message: String },
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishError::Config(msg) => write!(f, "config error: {msg}"),
            PublishError::Network(msg) => write!(f, "network error: {msg}"),
            PublishError::Api { status, message } => {
                write!(f, "webhook error (HTTP {status}): {message}")
            }
        }
    }
}

impl std::error::Error for PublishError {}

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Returns the name of the publisher.
    fn name(&self) -> &str;

    /// Sends an exported course document (JSON text).
    async fn publish(&self, payload: &str) -> Result<(), PublishError>;
}
