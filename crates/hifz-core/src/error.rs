//! Error types for the hifz frontend

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page load failed: {0}")]
    Load(#[from] LoadError),

    #[error("DOM error: {message}")]
    Dom { message: String },
}

impl Error {
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }
}

/// Outcome of a single page load.
///
/// Kept separate from [`Error`] and restricted to owned string payloads so
/// that load settlements stay `Clone` inside [`crate::CascadeMsg`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Transport-level failure (fetch rejected, no response).
    #[error("request failed: {message}")]
    Network { message: String },

    /// The endpoint answered with a non-success HTTP status.
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    /// The endpoint reported a logical error in its response body.
    #[error("server error: {message}")]
    Api { message: String },

    /// The response body could not be decoded into a page list.
    #[error("invalid pages response: {message}")]
    Decode { message: String },
}

impl LoadError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Server-reported logical errors leave the selects in their loading
    /// state; every other failure replaces them with the error placeholder.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, LoadError::Api { .. })
    }
}
