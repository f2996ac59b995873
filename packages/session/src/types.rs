// ABOUTME: Session state, user actions and transition results
// ABOUTME: Brief, approach and estimate are independently optional; the quiz starts idle

use idbrief_core::LearningStyle;
use idbrief_generator::{Approach, Brief, Estimate};
use idbrief_quiz::QuizSession;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything currently displayed to one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub brief: Option<Brief>,
    pub approach: Option<Approach>,
    /// Always computed from the current `brief`; cleared when the brief is replaced
    pub estimate: Option<Estimate>,
    pub quiz: QuizSession,
}

/// A discrete user intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "style", rename_all = "kebab-case")]
pub enum Action {
    GenerateBrief,
    GenerateApproach,
    GenerateEstimate,
    StartQuiz,
    AnswerQuestion(LearningStyle),
}

impl Action {
    /// Command name, e.g. "generate-brief"
    pub fn name(&self) -> &'static str {
        match self {
            Action::GenerateBrief => "generate-brief",
            Action::GenerateApproach => "generate-approach",
            Action::GenerateEstimate => "generate-estimate",
            Action::StartQuiz => "start-quiz",
            Action::AnswerQuestion(_) => "answer-question",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::AnswerQuestion(style) => write!(f, "{} ({})", self.name(), style),
            _ => f.write_str(self.name()),
        }
    }
}

/// Blocking, user-visible message raised instead of a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    BriefRequired,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::BriefRequired => f.write_str("Please generate a Brief first!"),
        }
    }
}

/// Result of applying one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    /// Set when the action was refused; `state` is then the unchanged input
    pub notice: Option<Notice>,
}

impl Transition {
    pub fn changed(state: SessionState) -> Self {
        Self {
            state,
            notice: None,
        }
    }

    pub fn refused(state: SessionState, notice: Notice) -> Self {
        Self {
            state,
            notice: Some(notice),
        }
    }
}
