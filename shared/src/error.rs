//! Domain errors shared by the server and the client.

use thiserror::Error;

/// Errors raised by the record store, the scoring engine and the ranking engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// No stored player carries the identifier.
    #[error("player not found: {0}")]
    NotFound(String),

    /// A player with the identifier already exists.
    #[error("player already exists: {0}")]
    DuplicateIdentifier(String),

    /// A record or request failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The selected answer number is outside the options of the question.
    #[error("selection {selection} is out of range for question {question} (1-{available})")]
    SelectionOutOfRange {
        question: usize,
        selection: usize,
        available: usize,
    },
}

impl QuizError {
    /// Short machine-readable name used in error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            QuizError::NotFound(_) => "NotFound",
            QuizError::DuplicateIdentifier(_) => "DuplicateIdentifier",
            QuizError::InvalidInput(_) | QuizError::SelectionOutOfRange { .. } => "InvalidInput",
        }
    }
}
