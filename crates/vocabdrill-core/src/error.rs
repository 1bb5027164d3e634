//! Error types.
//!
//! `ServiceError` describes transport-level failures talking to the remote
//! endpoints. `SessionError` is what a practice session retains and shows the
//! learner; every service failure collapses into one of its two kinds.

use thiserror::Error;

/// Errors that can occur when calling the word or validation endpoint.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The endpoint answered with a non-success status.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The error a session holds after a failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Fetching a word failed. Carries the underlying failure text.
    #[error("Cannot load word: {0}")]
    WordLoadFailure(String),

    /// Validating a sentence failed. The detail is kept for logs only; the
    /// learner always sees the same message.
    #[error("Failed to validate sentence")]
    ValidationFailure { detail: String },
}

impl SessionError {
    pub fn word_load(err: &anyhow::Error) -> Self {
        SessionError::WordLoadFailure(format!("{err:#}"))
    }

    pub fn validation(err: &anyhow::Error) -> Self {
        SessionError::ValidationFailure {
            detail: format!("{err:#}"),
        }
    }
}
