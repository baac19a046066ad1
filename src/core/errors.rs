use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl ExchangeError {
    /// True when the HTTP exchange itself could not be completed.
    ///
    /// Service-reported errors never show up here; they arrive as
    /// [`ApiResponse::ServiceError`](crate::core::types::ApiResponse::ServiceError).
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::NetworkError(_) | Self::HttpStatus { .. })
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        Self::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        Self::DeserializationError(err.to_string())
    }
}
