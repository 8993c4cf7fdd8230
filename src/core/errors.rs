//! Error types for PostgreSQL URL conversion
//! Provides structured error handling using thiserror for better error reporting

use thiserror::Error;

/// Main error type for URL to connection string conversion
#[derive(Error, Debug)]
pub enum ConnInfoError {
    /// The input does not parse as a URL
    #[error("Malformed connection URL: {message}")]
    MalformedUrl { message: String },

    /// The URL parsed but its scheme is not `postgres`
    #[error("invalid connection protocol: {scheme}")]
    InvalidProtocol { scheme: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON output errors
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type ConnInfoResult<T> = std::result::Result<T, ConnInfoError>;

impl From<url::ParseError> for ConnInfoError {
    fn from(err: url::ParseError) -> Self {
        Self::malformed(err.to_string())
    }
}

impl ConnInfoError {
    /// Create a malformed URL error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedUrl {
            message: message.into(),
        }
    }

    /// Create an invalid protocol error naming the offending scheme
    pub fn invalid_protocol<S: Into<String>>(scheme: S) -> Self {
        Self::InvalidProtocol {
            scheme: scheme.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error came from parsing the URL itself
    pub fn is_malformed_url(&self) -> bool {
        matches!(self, Self::MalformedUrl { .. })
    }

    /// Whether this error came from an unsupported scheme
    pub fn is_invalid_protocol(&self) -> bool {
        matches!(self, Self::InvalidProtocol { .. })
    }
}
