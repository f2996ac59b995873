// ABOUTME: Learning style quiz commands
// ABOUTME: Interactive prompting through inquire, or scoring a supplied list of answers

use anyhow::bail;
use colored::*;
use idbrief_cli::render::{render_quiz, QuizReport};
use idbrief_config::Config;
use idbrief_core::constants::QUIZ_LENGTH;
use idbrief_core::LearningStyle;
use idbrief_quiz::QuizSession;
use inquire::Select;

/// Score exactly ten answers without prompting
pub fn score_answers(config: &Config, answers: &[LearningStyle]) -> anyhow::Result<()> {
    if answers.len() != QUIZ_LENGTH {
        bail!("Expected {} answers, got {}", QUIZ_LENGTH, answers.len());
    }

    let mut quiz = QuizSession::start();
    for style in answers {
        quiz = quiz.answer(*style)?;
    }

    println!("{}", render_quiz(&QuizReport::from_session(&quiz), config.output)?);
    Ok(())
}

pub fn run_interactive(config: &Config) -> anyhow::Result<()> {
    println!("{}", "🧠 Learning Style Quiz".blue().bold());
    println!();

    let quiz = ask_all(QuizSession::start())?;
    println!();
    println!("{}", render_quiz(&QuizReport::from_session(&quiz), config.output)?);
    Ok(())
}

/// Prompt for the current question until the quiz completes
pub fn ask_all(mut quiz: QuizSession) -> anyhow::Result<QuizSession> {
    while let Some(question) = quiz.current_question() {
        if let Some(progress) = quiz.progress() {
            println!("{}", progress.dimmed());
        }
        let options: Vec<&str> = question.answers.iter().map(|a| a.text).collect();
        let choice = Select::new(question.prompt, options).raw_prompt()?;
        quiz = quiz.answer_choice(choice.index)?;
    }
    Ok(quiz)
}
