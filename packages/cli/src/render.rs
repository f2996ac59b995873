// ABOUTME: Output rendering for briefs, approaches, estimates and quiz results
// ABOUTME: Text (colored tables), JSON and Markdown renderings of the same reports

use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use idbrief_config::OutputFormat;
use idbrief_core::{Audience, Constraint, Format, IdModel, LearningStyle, Theory, Topic};
use idbrief_generator::templates::{format_cost, format_timeline};
use idbrief_generator::{
    estimate_budget_and_timeline, explain_estimate, Approach, Brief, Estimate,
};
use idbrief_quiz::{result_summary, QuizSession};
use idbrief_session::{Notice, SessionState};
use serde::Serialize;

const ESTIMATE_DISCLAIMER: &str =
    "These are rough estimates based on format & constraints. Adjust as needed!";

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Pure estimator output for a format and constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateReport {
    pub format: Format,
    pub constraint: Constraint,
    pub estimate: Estimate,
    pub notes: Vec<String>,
}

impl EstimateReport {
    pub fn new(format: Format, constraint: Constraint) -> Self {
        Self {
            format,
            constraint,
            estimate: estimate_budget_and_timeline(format, constraint),
            notes: explain_estimate(format, constraint),
        }
    }
}

/// Quiz outcome with the per-style breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub result: Option<LearningStyle>,
    pub answers: Vec<LearningStyle>,
    pub tally: Vec<(LearningStyle, usize)>,
    pub summary: Option<String>,
}

impl QuizReport {
    pub fn from_session(quiz: &QuizSession) -> Self {
        Self {
            result: quiz.result(),
            answers: quiz.answers().to_vec(),
            tally: quiz.tally().iter().collect(),
            summary: quiz.result().map(result_summary),
        }
    }
}

/// Every fixed content table
#[derive(Debug, Clone, Serialize)]
pub struct ContentTables {
    pub topics: &'static [Topic],
    pub audiences: &'static [Audience],
    pub constraints: &'static [Constraint],
    pub formats: &'static [Format],
    pub learning_styles: &'static [LearningStyle],
    pub theories: &'static [Theory],
    pub models: &'static [IdModel],
}

impl Default for ContentTables {
    fn default() -> Self {
        Self {
            topics: Topic::ALL,
            audiences: Audience::ALL,
            constraints: Constraint::ALL,
            formats: Format::ALL,
            learning_styles: LearningStyle::ALL,
            theories: Theory::ALL,
            models: IdModel::ALL,
        }
    }
}

// ============================================================================
// Dispatch
// ============================================================================

pub fn render_state(state: &SessionState, output: OutputFormat) -> serde_json::Result<String> {
    match output {
        OutputFormat::Text => Ok(state_text(state)),
        OutputFormat::Json => serde_json::to_string_pretty(state),
        OutputFormat::Markdown => Ok(state_markdown(state)),
    }
}

pub fn render_estimate(report: &EstimateReport, output: OutputFormat) -> serde_json::Result<String> {
    match output {
        OutputFormat::Text => Ok(estimate_report_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Markdown => Ok(estimate_report_markdown(report)),
    }
}

pub fn render_quiz(report: &QuizReport, output: OutputFormat) -> serde_json::Result<String> {
    match output {
        OutputFormat::Text => Ok(quiz_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Markdown => Ok(quiz_markdown(report)),
    }
}

pub fn render_tables(tables: &ContentTables, output: OutputFormat) -> serde_json::Result<String> {
    match output {
        OutputFormat::Text => Ok(tables_text(tables)),
        OutputFormat::Json => serde_json::to_string_pretty(tables),
        OutputFormat::Markdown => Ok(tables_markdown(tables)),
    }
}

pub fn notice_text(notice: Notice) -> String {
    format!("{} {}", "⚠".yellow(), notice.to_string().yellow().bold())
}

// ============================================================================
// Text
// ============================================================================

pub fn state_text(state: &SessionState) -> String {
    let mut sections = Vec::new();

    if state.quiz.is_complete() {
        sections.push(quiz_text(&QuizReport::from_session(&state.quiz)));
    }
    if let Some(brief) = &state.brief {
        sections.push(brief_text(brief));
    }
    if let Some(approach) = &state.approach {
        sections.push(approach_text(approach));
    }
    if let Some(estimate) = &state.estimate {
        sections.push(estimate_text(estimate));
    }

    if sections.is_empty() {
        return "Nothing generated yet".dimmed().to_string();
    }
    sections.join("\n\n")
}

pub fn brief_text(brief: &Brief) -> String {
    let mut lines = vec![
        format!("📋 Project Brief - {}", brief.client_id)
            .blue()
            .bold()
            .to_string(),
        String::new(),
    ];

    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Project", brief.project_title.as_str()]);
    table.add_row(vec!["Topic", brief.topic.label()]);
    table.add_row(vec!["Audience", brief.audience.label()]);
    table.add_row(vec!["Constraint", brief.constraint.label()]);
    table.add_row(vec!["Format", brief.format.label()]);
    lines.push(table.to_string());

    lines.push(String::new());
    lines.push("Sample Learning Objectives".bold().to_string());
    for (index, objective) in brief.objectives.iter().enumerate() {
        lines.push(format!("  {}. {}", index + 1, objective));
    }
    lines.join("\n")
}

pub fn approach_text(approach: &Approach) -> String {
    let mut lines = vec![
        "📚 Theoretical Approach".blue().bold().to_string(),
        String::new(),
    ];

    let mut table = new_table();
    table.set_header(vec!["Element", "Choice"]);
    table.add_row(vec!["Learning style", approach.style.label()]);
    table.add_row(vec!["Learning theory", approach.theory.label()]);
    table.add_row(vec!["ID model", approach.model.label()]);
    lines.push(table.to_string());

    lines.push(String::new());
    lines.push("Why This Combination Works".bold().to_string());
    lines.push(approach.synergy_explanation.clone());

    lines.push(String::new());
    lines.push("How to Structure a Training Using These Elements".bold().to_string());
    for (index, step) in approach.application_steps.iter().enumerate() {
        lines.push(format!("  {} {}", format!("Step {}", index + 1).magenta(), step));
    }
    lines.join("\n")
}

pub fn estimate_text(estimate: &Estimate) -> String {
    [
        "💰 Budget & Timeline".green().bold().to_string(),
        format!("Estimated Budget:   {}", format_cost(estimate.cost).cyan()),
        format!(
            "Estimated Timeline: {}",
            format_timeline(estimate.timeline_weeks).cyan()
        ),
        ESTIMATE_DISCLAIMER.dimmed().to_string(),
    ]
    .join("\n")
}

fn estimate_report_text(report: &EstimateReport) -> String {
    let mut lines = vec![
        format!("{} + {}", report.format, report.constraint).bold().to_string(),
    ];
    for note in &report.notes {
        lines.push(format!("  • {}", note));
    }
    lines.push(String::new());
    lines.push(estimate_text(&report.estimate));
    lines.join("\n")
}

pub fn quiz_text(report: &QuizReport) -> String {
    let mut lines = vec!["🎯 Your Learning Style".blue().bold().to_string()];

    match (report.result, &report.summary) {
        (Some(result), Some(summary)) => {
            lines.push(format!("You got: {}", result.label().bold()));
            lines.push(summary.clone());
        }
        _ => lines.push(
            format!("Quiz incomplete ({} answers so far)", report.answers.len())
                .yellow()
                .to_string(),
        ),
    }

    let mut table = new_table();
    table.set_header(vec!["Style", "Answers"]);
    for (style, count) in &report.tally {
        table.add_row(vec![style.label().to_string(), count.to_string()]);
    }
    lines.push(table.to_string());
    lines.join("\n")
}

fn tables_text(tables: &ContentTables) -> String {
    fn section<T: std::fmt::Display>(title: &str, items: &[T]) -> String {
        let mut lines = vec![title.blue().bold().to_string()];
        for item in items {
            lines.push(format!("  • {}", item));
        }
        lines.join("\n")
    }

    [
        section("Topics", tables.topics),
        section("Audiences", tables.audiences),
        section("Constraints", tables.constraints),
        section("Formats", tables.formats),
        section("Learning styles", tables.learning_styles),
        section("Learning theories", tables.theories),
        section("Instructional design models", tables.models),
    ]
    .join("\n\n")
}

// ============================================================================
// Markdown
// ============================================================================

pub fn state_markdown(state: &SessionState) -> String {
    let mut sections = Vec::new();

    if let Some(brief) = &state.brief {
        sections.push(brief_markdown(brief));
    }
    if let Some(approach) = &state.approach {
        sections.push(approach_markdown(approach));
    }
    if let Some(estimate) = &state.estimate {
        sections.push(estimate_markdown(estimate));
    }
    if state.quiz.is_complete() {
        sections.push(quiz_markdown(&QuizReport::from_session(&state.quiz)));
    }

    if sections.is_empty() {
        return "_Nothing generated yet._\n".to_string();
    }
    let mut doc = sections.join("\n\n");
    doc.push('\n');
    doc
}

pub fn brief_markdown(brief: &Brief) -> String {
    let mut lines = vec![
        format!("# {}", brief.project_title),
        String::new(),
        format!("**Client:** {}", brief.client_id),
        String::new(),
        "| Field | Value |".to_string(),
        "|-------|-------|".to_string(),
        format!("| Topic | {} |", brief.topic),
        format!("| Audience | {} |", brief.audience),
        format!("| Constraint | {} |", brief.constraint),
        format!("| Format | {} |", brief.format),
        String::new(),
        "## Sample Learning Objectives".to_string(),
        String::new(),
    ];
    for (index, objective) in brief.objectives.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, objective));
    }
    lines.join("\n")
}

pub fn approach_markdown(approach: &Approach) -> String {
    let mut lines = vec![
        "## Theoretical Approach".to_string(),
        String::new(),
        format!("- **Learning style:** {}", approach.style),
        format!("- **Learning theory:** {}", approach.theory),
        format!("- **ID model:** {}", approach.model),
        String::new(),
        "### Why This Combination Works".to_string(),
        String::new(),
        approach.synergy_explanation.clone(),
        String::new(),
        "### How to Structure a Training Using These Elements".to_string(),
        String::new(),
    ];
    for (index, step) in approach.application_steps.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, step));
    }
    lines.join("\n")
}

pub fn estimate_markdown(estimate: &Estimate) -> String {
    [
        "## Budget & Timeline".to_string(),
        String::new(),
        format!("- **Estimated budget:** {}", format_cost(estimate.cost)),
        format!(
            "- **Estimated timeline:** {}",
            format_timeline(estimate.timeline_weeks)
        ),
        String::new(),
        format!("_{}_", ESTIMATE_DISCLAIMER),
    ]
    .join("\n")
}

fn estimate_report_markdown(report: &EstimateReport) -> String {
    let mut lines = vec![
        format!("## {} + {}", report.format, report.constraint),
        String::new(),
    ];
    for note in &report.notes {
        lines.push(format!("- {}", note));
    }
    lines.push(String::new());
    lines.push(estimate_markdown(&report.estimate));
    lines.join("\n")
}

pub fn quiz_markdown(report: &QuizReport) -> String {
    let mut lines = vec!["## Your Learning Style".to_string(), String::new()];
    if let (Some(result), Some(summary)) = (report.result, &report.summary) {
        lines.push(format!("You got: **{}**", result));
        lines.push(String::new());
        lines.push(summary.clone());
        lines.push(String::new());
    }
    lines.push("| Style | Answers |".to_string());
    lines.push("|-------|---------|".to_string());
    for (style, count) in &report.tally {
        lines.push(format!("| {} | {} |", style, count));
    }
    lines.join("\n")
}

fn tables_markdown(tables: &ContentTables) -> String {
    fn section<T: std::fmt::Display>(title: &str, items: &[T]) -> String {
        let mut lines = vec![format!("## {}", title), String::new()];
        for item in items {
            lines.push(format!("- {}", item));
        }
        lines.join("\n")
    }

    [
        section("Topics", tables.topics),
        section("Audiences", tables.audiences),
        section("Constraints", tables.constraints),
        section("Formats", tables.formats),
        section("Learning styles", tables.learning_styles),
        section("Learning theories", tables.theories),
        section("Instructional design models", tables.models),
    ]
    .join("\n\n")
}
