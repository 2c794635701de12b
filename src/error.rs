//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for transport-level failures.
///
/// Describes what went wrong at the networking layer without dictating
/// recovery strategy; retry policy, if any, belongs to the caller.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    ///
    /// Includes DNS resolution failures, connection refused, and TLS
    /// handshake errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server did not respond within the transport's deadline.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from its parts.
    ///
    /// Indicates a configuration error rather than a transient failure.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Error type for a single webhook send.
///
/// A send either fully succeeds (2xx received) or fails with exactly
/// one of these variants; there is no partial-success state.
#[derive(Debug, Error)]
pub enum SendError {
    /// The message payload could not be encoded as JSON.
    #[error("Failed to serialize message payload")]
    Serialization(#[source] serde_json::Error),

    /// The webhook URL could not be parsed.
    #[error("Invalid webhook URL")]
    InvalidUrl(#[source] url::ParseError),

    /// The transport failed before a response was received.
    #[error("Transport error")]
    Transport(#[source] TransportError),

    /// The transport's deadline elapsed before a response arrived.
    #[error("Request timed out")]
    Timeout,

    /// The caller's cancellation token fired before completion.
    #[error("Send cancelled")]
    Cancelled,

    /// The webhook endpoint answered with a non-2xx status.
    ///
    /// Carries the status code and the raw response body text to aid
    /// caller diagnostics.
    #[error("Webhook returned unsuccessful status code: {status}, body: {body}")]
    Rejected {
        /// HTTP status code of the response
        status: http::StatusCode,
        /// Response body, decoded as lossy UTF-8
        body: String,
    },
}

impl From<TransportError> for SendError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Timeout => Self::Timeout,
            other => Self::Transport(other),
        }
    }
}
