// ABOUTME: Error types for the quiz package
// ABOUTME: Rejected transitions of the quiz state machine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Quiz has not been started")]
    NotStarted,

    #[error("Quiz is already complete; start a new quiz to answer again")]
    AlreadyComplete,

    #[error("Invalid answer choice {choice}: question has {available} answers")]
    InvalidChoice { choice: usize, available: usize },

    #[error("Inconsistent quiz state: {0}")]
    InconsistentState(String),
}

pub type Result<T> = std::result::Result<T, QuizError>;
