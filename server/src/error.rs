//! Server error types.

use shared::QuizError;
use thiserror::Error;

/// Errors that stop the server itself, as opposed to a single request.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The HTTP listener could not be bound.
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    /// The seed data was rejected by the record store.
    #[error("invalid seed data: {0}")]
    Seed(#[from] QuizError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP status code reported for a domain error.
pub fn status_for(error: &QuizError) -> u16 {
    match error {
        QuizError::NotFound(_) => 404,
        QuizError::DuplicateIdentifier(_) => 409,
        QuizError::InvalidInput(_) | QuizError::SelectionOutOfRange { .. } => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&QuizError::NotFound("a".into())), 404);
        assert_eq!(status_for(&QuizError::DuplicateIdentifier("a".into())), 409);
        assert_eq!(status_for(&QuizError::InvalidInput("a".into())), 400);
    }

    #[test]
    fn test_bind_error_message() {
        let err = ServerError::Bind {
            addr: "127.0.0.1:80".into(),
            reason: "permission denied".into(),
        };
        assert_eq!(err.to_string(), "failed to bind 127.0.0.1:80: permission denied");
    }
}
