// ABOUTME: Error types for the core package
// ABOUTME: Covers random selection preconditions and label parsing

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Cannot select from an empty table")]
    EmptySelection,

    #[error("Unknown {kind}: {value}")]
    UnknownLabel { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
