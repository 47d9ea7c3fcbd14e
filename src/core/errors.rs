//! Custom error types for Transfluent API operations

use thiserror::Error;

/// Errors raised by the Transfluent client
#[derive(Error, Debug)]
pub enum TransfluentError {
    /// Request method other than GET or POST; rejected before any network call
    #[error("Unsupported request method: {0}")]
    UnsupportedMethod(String),

    /// Non-200 response carrying the service's error envelope
    #[error("{message}")]
    Remote {
        /// Machine-readable error code, e.g. `EBackendParameterInvalid`
        kind: String,
        /// Human-readable message from the service
        message: String,
    },

    /// Non-200 response whose body could not be decoded as an error envelope
    #[error("Malformed error response: {message}")]
    MalformedResponse {
        /// Decoding failure detail
        message: String,
    },

    /// 200 response whose JSON body lacks the expected shape
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was missing or wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What was rejected
        message: String,
    },

    /// IO error while consuming a file source
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl TransfluentError {
    /// Error code of a `Remote` error, if this is one
    pub fn remote_kind(&self) -> Option<&str> {
        match self {
            TransfluentError::Remote { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Result type for Transfluent operations
pub type Result<T> = std::result::Result<T, TransfluentError>;
