// ABOUTME: Type definitions for generated artifacts
// ABOUTME: Brief, Approach and Estimate are immutable once generated and replaced wholesale

use idbrief_core::{Audience, Constraint, Format, IdModel, LearningStyle, Theory, Topic};
use serde::{Deserialize, Serialize};

/// A generated instructional design project brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    /// "Client N" with N in [0, 999]; not unique across generations
    pub client_id: String,
    pub project_title: String,
    pub topic: Topic,
    pub audience: Audience,
    pub constraint: Constraint,
    pub format: Format,
    pub objectives: Vec<String>,
}

/// A generated pedagogical strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approach {
    pub style: LearningStyle,
    pub theory: Theory,
    pub model: IdModel,
    pub synergy_explanation: String,
    pub application_steps: Vec<String>,
}

/// Budget and timeline derived from a brief's format and constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    /// Whole US dollars
    pub cost: u32,
    pub timeline_weeks: u32,
}
