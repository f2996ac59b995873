// ABOUTME: Interactive session shell
// ABOUTME: Offers the user actions over one in-memory session until the user quits

use colored::*;
use idbrief_cli::render::{
    approach_text, brief_text, estimate_text, notice_text, quiz_text, render_state, QuizReport,
};
use idbrief_config::{Config, OutputFormat};
use idbrief_core::SeededRandom;
use idbrief_session::{Action, Session};
use inquire::Select;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    GenerateBrief,
    GenerateApproach,
    GenerateEstimate,
    TakeQuiz,
    ShowSession,
    ExportMarkdown,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 7] = [
        MenuItem::GenerateBrief,
        MenuItem::GenerateApproach,
        MenuItem::GenerateEstimate,
        MenuItem::TakeQuiz,
        MenuItem::ShowSession,
        MenuItem::ExportMarkdown,
        MenuItem::Quit,
    ];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::GenerateBrief => "Generate Brief",
            MenuItem::GenerateApproach => "Generate Approach",
            MenuItem::GenerateEstimate => "Generate Budget & Timeline",
            MenuItem::TakeQuiz => "Take Quiz",
            MenuItem::ShowSession => "Show session",
            MenuItem::ExportMarkdown => "Export as Markdown",
            MenuItem::Quit => "Quit",
        };
        f.write_str(label)
    }
}

pub fn run_shell(config: &Config, rng: SeededRandom) -> anyhow::Result<()> {
    println!("{}", "⚡ Instructional Design Brief Generator".blue().bold());
    println!(
        "{}",
        "Generate a project brief & approach, discover your learning style, or get a budget & timeline estimate!"
            .dimmed()
    );
    if let Some(seed) = rng.seed() {
        println!("{}", format!("Seed: {}", seed).dimmed());
    }
    println!();

    let mut session = Session::new(rng);

    loop {
        let item = Select::new("What would you like to do?", MenuItem::ALL.to_vec()).prompt()?;
        println!();

        match item {
            MenuItem::GenerateBrief => {
                session.dispatch(Action::GenerateBrief)?;
                let state = session.state();
                if let Some(brief) = &state.brief {
                    println!("{}", brief_text(brief));
                    println!();
                }
                if let Some(approach) = &state.approach {
                    println!("{}", approach_text(approach));
                }
            }
            MenuItem::GenerateApproach => {
                session.dispatch(Action::GenerateApproach)?;
                if let Some(approach) = &session.state().approach {
                    println!("{}", approach_text(approach));
                }
            }
            MenuItem::GenerateEstimate => match session.dispatch(Action::GenerateEstimate)? {
                Some(notice) => println!("{}", notice_text(notice)),
                None => {
                    if let Some(estimate) = &session.state().estimate {
                        println!("{}", estimate_text(estimate));
                    }
                }
            },
            MenuItem::TakeQuiz => {
                session.dispatch(Action::StartQuiz)?;
                while let Some(question) = session.state().quiz.current_question() {
                    if let Some(progress) = session.state().quiz.progress() {
                        println!("{}", progress.dimmed());
                    }
                    let options: Vec<&str> = question.answers.iter().map(|a| a.text).collect();
                    let choice = Select::new(question.prompt, options).raw_prompt()?;
                    let style = question.answers[choice.index].style;
                    session.dispatch(Action::AnswerQuestion(style))?;
                }
                println!();
                println!("{}", quiz_text(&QuizReport::from_session(&session.state().quiz)));
            }
            MenuItem::ShowSession => {
                println!("{}", render_state(session.state(), config.output)?);
            }
            MenuItem::ExportMarkdown => {
                println!("{}", render_state(session.state(), OutputFormat::Markdown)?);
            }
            MenuItem::Quit => {
                info!("Leaving interactive session");
                break;
            }
        }
        println!();
    }

    Ok(())
}
