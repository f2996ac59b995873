// ABOUTME: Core types, content tables, and randomness for idbrief
// ABOUTME: Foundational package providing the fixed vocabularies shared by every idbrief package

pub mod constants;
pub mod error;
pub mod random;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export main types
pub use types::{Audience, Constraint, Format, IdModel, LearningStyle, Theory, Topic};

// Re-export errors
pub use error::{CoreError, Result};

// Re-export randomness
pub use random::{pick, RandomSource, SeededRandom};
