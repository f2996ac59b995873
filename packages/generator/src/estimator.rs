// ABOUTME: Rule-based budget and timeline estimation
// ABOUTME: Additive format adjustment followed by a constraint adjustment with branch-local floors

use crate::types::{Brief, Estimate};
use idbrief_core::{Constraint, Format};
use tracing::debug;

pub const BASE_COST: u32 = 2000;
pub const BASE_TIMELINE_WEEKS: u32 = 4;

/// Cost floor, applied only by the limited-budget rule
pub const LIMITED_BUDGET_COST_FLOOR: u32 = 1000;

/// Timeline floor, applied only by the tight-timeline rule
pub const TIGHT_TIMELINE_WEEKS_FLOOR: u32 = 1;

/// Estimate cost and timeline for a format and constraint.
///
/// The floors are deliberately asymmetric: cost is only clamped under
/// "Limited budget" and the timeline only under "Tight timeline".
pub fn estimate_budget_and_timeline(format: Format, constraint: Constraint) -> Estimate {
    let mut cost = BASE_COST;
    let mut timeline_weeks = BASE_TIMELINE_WEEKS;

    match format {
        Format::VideoBasedModules => {
            cost += 3000;
            timeline_weeks += 2;
        }
        Format::Gamified => {
            cost += 2000;
            timeline_weeks += 1;
        }
        Format::IltElearningBlend => {
            cost += 1000;
            timeline_weeks += 2;
        }
        Format::MicroLearning => {
            cost += 500;
            timeline_weeks = timeline_weeks.saturating_sub(1);
        }
        Format::ScenarioBasedElearning | Format::SelfPacedWithQuizzes => {
            cost += 1000;
            timeline_weeks += 1;
        }
    }

    match constraint {
        Constraint::TightTimeline => {
            cost += 1000;
            timeline_weeks = timeline_weeks
                .saturating_sub(1)
                .max(TIGHT_TIMELINE_WEEKS_FLOOR);
        }
        Constraint::LimitedBudget => {
            cost = cost.saturating_sub(1000).max(LIMITED_BUDGET_COST_FLOOR);
            timeline_weeks += 1;
        }
        _ => {}
    }

    debug!(%format, %constraint, cost, timeline_weeks, "Estimated budget and timeline");

    Estimate {
        cost,
        timeline_weeks,
    }
}

/// Human-readable list of the rules that fired for this combination
pub fn explain_estimate(format: Format, constraint: Constraint) -> Vec<String> {
    let mut notes = vec![format!(
        "Base: ${} over {} weeks",
        BASE_COST, BASE_TIMELINE_WEEKS
    )];

    notes.push(match format {
        Format::VideoBasedModules => "Video-based modules: +$3000, +2 weeks".to_string(),
        Format::Gamified => "Gamified approach: +$2000, +1 week".to_string(),
        Format::IltElearningBlend => "ILT + eLearning blend: +$1000, +2 weeks".to_string(),
        Format::MicroLearning => "Micro-learning: +$500, -1 week".to_string(),
        other => format!("{}: +$1000, +1 week", other),
    });

    match constraint {
        Constraint::TightTimeline => {
            notes.push("Tight timeline: +$1000 rush cost, -1 week (minimum 1 week)".to_string())
        }
        Constraint::LimitedBudget => {
            notes.push("Limited budget: -$1000 (minimum $1000), +1 week".to_string())
        }
        other => notes.push(format!("{}: no adjustment", other)),
    }

    notes
}

impl Estimate {
    /// Estimate from a brief's format and constraint
    pub fn for_brief(brief: &Brief) -> Self {
        estimate_budget_and_timeline(brief.format, brief.constraint)
    }
}
