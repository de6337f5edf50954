//! Client error types.

use shared::QuizError;
use thiserror::Error;

/// Errors that can occur while talking to the quiz server or the user.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server could not be reached or did not answer in time.
    #[error("quiz API unavailable at {url}: {reason}")]
    UpstreamUnavailable { url: String, reason: String },

    /// The server reported that the record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server rejected the request as invalid.
    #[error("rejected by server: {0}")]
    Rejected(String),

    /// The server answered with an unexpected status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The server answered with a body that could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Reading from or writing to the terminal failed.
    #[error("console error: {0}")]
    Console(#[from] std::io::Error),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl ClientError {
    /// Connectivity failures end an interactive session.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ClientError::UpstreamUnavailable { .. })
    }
}
