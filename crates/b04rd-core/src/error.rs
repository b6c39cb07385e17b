//! Error types shared across the b04rd client.

use thiserror::Error;

/// A shared error type for the whole client.
///
/// Provides typed, structured variants with automatic conversion from
/// common error types via `From`.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Entity not found (unknown or expired id)
    #[error("{entity} not found: '{id}'")]
    NotFound { entity: &'static str, id: String },

    /// The backend answered with a non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Transport-level failure (connect, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Local storage error (session id file, config dir)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No session is currently established
    #[error("No active session")]
    NoSession,

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardError {
    /// Creates a NotFound error.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Creates an Http error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a Storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error indicates the entity was not found.
    ///
    /// Returns true for `NotFound` and for `Http` errors with a 404 status.
    /// The session bootstrap treats both the same way: fall back to
    /// creating a fresh session.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Http { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// Check if this is a transport-level failure.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<std::io::Error> for BoardError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Serialization(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// A type alias for `Result<T, BoardError>`.
pub type Result<T> = std::result::Result<T, BoardError>;
