// ABOUTME: idbrief quiz library - ten-question learning style quiz
// ABOUTME: Question bank, Idle/InProgress/Complete state machine and first-seen-wins scoring

pub mod error;
pub mod questions;
pub mod scoring;
pub mod session;

pub use error::{QuizError, Result};
pub use questions::{QuizAnswer, QuizQuestion, QUIZ_QUESTIONS};
pub use scoring::{dominant_style, result_summary, tally, StyleTally};
pub use session::{QuizSession, QuizStatus};
