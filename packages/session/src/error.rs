// ABOUTME: Error types for the session package
// ABOUTME: Wraps generator and quiz failures; a missing brief is a Notice, not an error

use idbrief_generator::GeneratorError;
use idbrief_quiz::QuizError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
