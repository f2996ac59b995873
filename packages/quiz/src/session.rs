// ABOUTME: Quiz state machine
// ABOUTME: Idle -> InProgress(0..9) -> Complete(result); only start() leaves Complete

use crate::error::{QuizError, Result};
use crate::questions::{QuizQuestion, QUIZ_QUESTIONS};
use crate::scoring::{dominant_style, tally, StyleTally};
use idbrief_core::constants::QUIZ_LENGTH;
use idbrief_core::LearningStyle;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizStatus {
    /// No quiz started yet
    #[default]
    Idle,
    /// Waiting for the answer to `question_index`
    InProgress { question_index: usize },
    /// All questions answered
    Complete { result: LearningStyle },
}

/// One run through the quiz.
///
/// Transitions return a new session and leave `self` untouched. Deserialized
/// sessions are checked against the same rules the transitions follow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuizSnapshot")]
pub struct QuizSession {
    status: QuizStatus,
    answers: Vec<LearningStyle>,
}

#[derive(Deserialize)]
struct QuizSnapshot {
    status: QuizStatus,
    answers: Vec<LearningStyle>,
}

impl TryFrom<QuizSnapshot> for QuizSession {
    type Error = QuizError;

    fn try_from(snapshot: QuizSnapshot) -> Result<Self> {
        let QuizSnapshot { status, answers } = snapshot;
        let answered = answers.len();

        match status {
            QuizStatus::Idle if answered > 0 => Err(QuizError::InconsistentState(format!(
                "idle quiz has {answered} answers"
            ))),
            QuizStatus::InProgress { question_index } if question_index >= QUIZ_LENGTH => {
                Err(QuizError::InconsistentState(format!(
                    "question index {question_index} is past the last question"
                )))
            }
            QuizStatus::InProgress { question_index } if question_index != answered => {
                Err(QuizError::InconsistentState(format!(
                    "question index {question_index} with {answered} answers"
                )))
            }
            QuizStatus::Complete { .. } if answered != QUIZ_LENGTH => {
                Err(QuizError::InconsistentState(format!(
                    "complete quiz has {answered} answers"
                )))
            }
            QuizStatus::Complete { result } if dominant_style(&tally(&answers)) != Some(result) => {
                Err(QuizError::InconsistentState(format!(
                    "result {result} does not match the answers"
                )))
            }
            _ => Ok(Self { status, answers }),
        }
    }
}

impl QuizSession {
    /// Idle session
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session at the first question. Valid from any state.
    pub fn start() -> Self {
        debug!("Starting quiz");
        Self {
            status: QuizStatus::InProgress { question_index: 0 },
            answers: Vec::with_capacity(QUIZ_LENGTH),
        }
    }

    /// Record an answer for the current question
    pub fn answer(&self, style: LearningStyle) -> Result<Self> {
        let question_index = match self.status {
            QuizStatus::InProgress { question_index } => question_index,
            QuizStatus::Idle => return Err(QuizError::NotStarted),
            QuizStatus::Complete { .. } => return Err(QuizError::AlreadyComplete),
        };

        let mut answers = self.answers.clone();
        answers.push(style);
        debug!(question_index, %style, "Recorded quiz answer");

        if question_index + 1 < QUIZ_LENGTH {
            return Ok(Self {
                status: QuizStatus::InProgress {
                    question_index: question_index + 1,
                },
                answers,
            });
        }

        // answers holds QUIZ_LENGTH entries here, so a winner always exists
        let result = dominant_style(&tally(&answers)).unwrap_or(style);
        info!(%result, "Quiz complete");
        Ok(Self {
            status: QuizStatus::Complete { result },
            answers,
        })
    }

    /// Record the answer at position `choice` of the current question
    pub fn answer_choice(&self, choice: usize) -> Result<Self> {
        let question = match self.status {
            QuizStatus::Idle => return Err(QuizError::NotStarted),
            QuizStatus::Complete { .. } => return Err(QuizError::AlreadyComplete),
            QuizStatus::InProgress { question_index } => QUIZ_QUESTIONS
                .get(question_index)
                .ok_or(QuizError::AlreadyComplete)?,
        };
        let style = question.style_of(choice).ok_or(QuizError::InvalidChoice {
            choice,
            available: question.answers.len(),
        })?;
        self.answer(style)
    }

    pub fn status(&self) -> QuizStatus {
        self.status
    }

    pub fn answers(&self) -> &[LearningStyle] {
        &self.answers
    }

    pub fn question_index(&self) -> Option<usize> {
        match self.status {
            QuizStatus::InProgress { question_index } => Some(question_index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        self.question_index().and_then(|index| QUIZ_QUESTIONS.get(index))
    }

    /// "Question 3 of 10" while in progress
    pub fn progress(&self) -> Option<String> {
        self.question_index()
            .map(|index| format!("Question {} of {}", index + 1, QUIZ_LENGTH))
    }

    pub fn result(&self) -> Option<LearningStyle> {
        match self.status {
            QuizStatus::Complete { result } => Some(result),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.status, QuizStatus::Complete { .. })
    }

    pub fn tally(&self) -> StyleTally {
        tally(&self.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idbrief_core::LearningStyle::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn run(answers: &[LearningStyle]) -> QuizSession {
        answers
            .iter()
            .fold(QuizSession::start(), |session, style| {
                session.answer(*style).unwrap()
            })
    }

    #[test]
    fn test_new_is_idle() {
        let session = QuizSession::new();
        assert_eq!(session.status(), QuizStatus::Idle);
        assert_eq!(session.current_question(), None);
        assert_eq!(session.progress(), None);
        assert_eq!(session.answer(Visual), Err(QuizError::NotStarted));
    }

    #[test]
    fn test_advances_one_question_per_answer() {
        let session = QuizSession::start();
        assert_eq!(session.progress().as_deref(), Some("Question 1 of 10"));

        let next = session.answer(Social).unwrap();
        assert_eq!(next.question_index(), Some(1));
        assert_eq!(next.answers(), &[Social]);
        assert_eq!(next.progress().as_deref(), Some("Question 2 of 10"));

        // the original session is unchanged
        assert_eq!(session.question_index(), Some(0));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_not_complete_before_ten_answers() {
        let nine = run(&[Visual; 9]);
        assert!(!nine.is_complete());
        assert_eq!(nine.question_index(), Some(9));
        assert_eq!(nine.result(), None);

        let ten = nine.answer(Auditory).unwrap();
        assert!(ten.is_complete());
        assert_eq!(ten.result(), Some(Visual));
        assert_eq!(ten.answers().len(), 10);
    }

    #[test]
    fn test_rejects_eleventh_answer() {
        let done = run(&[Kinesthetic; 10]);
        assert_eq!(done.answer(Visual), Err(QuizError::AlreadyComplete));
        assert_eq!(done.answer_choice(0), Err(QuizError::AlreadyComplete));
    }

    #[test]
    fn test_restart_after_complete() {
        let done = run(&[Solo; 10]);
        assert_eq!(done.result(), Some(Solo));

        let restarted = QuizSession::start();
        assert_eq!(restarted.question_index(), Some(0));
        assert!(restarted.answers().is_empty());
        assert_eq!(restarted.result(), None);
    }

    #[test]
    fn test_answer_choice_maps_to_style() {
        let session = QuizSession::start().answer_choice(3).unwrap();
        assert_eq!(session.answers(), &[ReadingWriting]);

        assert_eq!(
            session.answer_choice(6),
            Err(QuizError::InvalidChoice {
                choice: 6,
                available: 6
            })
        );
    }

    #[test]
    fn test_current_question_follows_index() {
        let session = run(&[Visual; 4]);
        let question = session.current_question().unwrap();
        assert!(question.prompt.starts_with("5. "));
    }

    #[test]
    fn test_deserialize_round_trips_valid_sessions() {
        for session in [QuizSession::new(), run(&[Auditory; 3]), run(&[Social; 10])] {
            let json = serde_json::to_value(&session).unwrap();
            let back: QuizSession = serde_json::from_value(json).unwrap();
            assert_eq!(back, session);
        }
    }

    #[rstest]
    #[case::index_past_last_question(json!({
        "status": { "state": "in_progress", "question_index": 42 },
        "answers": []
    }))]
    #[case::index_ahead_of_answers(json!({
        "status": { "state": "in_progress", "question_index": 9 },
        "answers": ["Visual"]
    }))]
    #[case::idle_with_answers(json!({
        "status": { "state": "idle" },
        "answers": ["Solo"]
    }))]
    #[case::complete_too_early(json!({
        "status": { "state": "complete", "result": "Solo" },
        "answers": ["Solo"]
    }))]
    #[case::complete_with_wrong_result(json!({
        "status": { "state": "complete", "result": "Solo" },
        "answers": ["Visual", "Visual", "Visual", "Visual", "Visual",
                    "Visual", "Visual", "Visual", "Visual", "Visual"]
    }))]
    fn test_deserialize_rejects_unreachable_states(#[case] json: serde_json::Value) {
        let err = serde_json::from_value::<QuizSession>(json).unwrap_err();
        assert!(err.to_string().starts_with("Inconsistent quiz state"));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(QuizStatus::Complete { result: ReadingWriting }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "state": "complete", "result": "Reading/Writing" })
        );
    }
}
