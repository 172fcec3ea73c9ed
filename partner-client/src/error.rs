//! Client error types

use reqwest::StatusCode;
use shared::client::ErrorBody;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; `body` is the raw response text
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Invalid response format
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Local form validation failed; no request was made
    #[error("{0}")]
    Validation(String),

    /// No partner id / token in the persisted session
    #[error("no partner identity found, please log in again")]
    MissingIdentity,

    /// Session storage I/O failure
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Server-provided message when the error body is a JSON
    /// `{"message": ...}` object.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ClientError::Status { body, .. } => {
                serde_json::from_str::<ErrorBody>(body).ok()?.message
            }
            _ => None,
        }
    }

    /// Server message if present, otherwise the given fallback text.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
