//! Verification API client error types.

use crate::config::ConfigError;

/// Errors from verification API calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The API rejected the tenant credentials.
    #[error("verification API rejected the credentials: {message}")]
    Auth {
        /// Server-supplied message, when the response body carried one.
        message: String,
    },
    /// Network failure before any response was received.
    #[error("network error calling {endpoint}: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The API returned a non-success status.
    #[error("verification API returned {status}: {message}")]
    Server {
        status: u16,
        /// Server-supplied message, verbatim.
        message: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize verification response: {source}")]
    Deserialization { source: reqwest::Error },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// The short message a workflow surfaces to the user. Server-supplied
    /// messages pass through verbatim; transport-level failures render
    /// their full description.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth { message } | Self::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
