//! Error types for the gateway agents controller

use thiserror::Error;

/// Main error type for gateway requests
///
/// Every variant is a flavor of request failure. The controller never
/// propagates these to its callers; it renders them with `Display` into the
/// matching error field of [`AgentsState`](crate::AgentsState).
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The connection to the gateway is unusable
    #[error("Connection error: {0}")]
    Connection(String),

    /// The gateway answered the request with an error
    #[error("Request {method} failed ({code}): {message}")]
    Request {
        /// Method that was requested
        method: String,
        /// Gateway error code
        code: String,
        /// Gateway error message
        message: String,
    },

    /// Frame could not be interpreted
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// JSON encode/decode failure for params, results, or frames
    #[error("JSON decode error: {0}")]
    JsonDecode(#[from] serde_json::Error),

    /// Too many requests are awaiting a response
    #[error("Too many pending requests (limit {0})")]
    TooManyPending(usize),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

impl GatewayError {
    /// Create a connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a request error from a gateway error response
    pub fn request(
        method: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Request {
            method: method.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a protocol error
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    /// Create a too-many-pending error
    #[must_use]
    pub fn too_many_pending(limit: usize) -> Self {
        Self::TooManyPending(limit)
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether the failure came from the gateway rejecting the request
    /// rather than from the connection or the local codec
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Request { .. })
    }
}
