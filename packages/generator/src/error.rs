// ABOUTME: Error types for the generator package
// ABOUTME: Generation only fails when a content table cannot be drawn from

use idbrief_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Random draw failed: {0}")]
    Draw(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
