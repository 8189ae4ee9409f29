use thiserror::Error;

/// Top-level error type for Courier.
#[derive(Debug, Error)]
pub enum CourierError {
    /// A response payload is missing a required field or carries a value
    /// of the wrong JSON type.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A method descriptor was built with parameters the API would reject.
    /// Raised before anything reaches the transport.
    #[error("invalid request parameters: {0}")]
    InvalidRequestParameters(String),

    /// The API answered with `ok: false`.
    #[error("telegram api error {code}: {description}")]
    Api { code: i64, description: String },

    /// Error reported by a transport implementation.
    #[error("transport error: {0}")]
    Transport(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CourierError {
    /// Shorthand for [`CourierError::MalformedResponse`] from a serde error.
    pub fn malformed(err: impl std::fmt::Display) -> Self {
        Self::MalformedResponse(err.to_string())
    }

    /// Shorthand for [`CourierError::InvalidRequestParameters`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidRequestParameters(msg.into())
    }
}
