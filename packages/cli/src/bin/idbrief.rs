use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use idbrief_cli::logging::init_tracing;
use idbrief_config::{Config, OutputFormat};
use idbrief_core::{Constraint, Format, LearningStyle, SeededRandom};
use std::process;
use tracing::debug;

mod cli;

#[derive(Parser)]
#[command(name = "idbrief")]
#[command(about = "Instructional design brief generator and learning style quiz")]
#[command(version)]
struct Cli {
    /// Seed for reproducible generation (overrides IDBRIEF_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format: text, json or markdown (overrides IDBRIEF_OUTPUT)
    #[arg(long, global = true)]
    output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a project brief together with a theoretical approach
    Brief {
        /// Also estimate budget and timeline for the brief
        #[arg(long)]
        estimate: bool,
    },
    /// Generate a theoretical approach on its own
    Approach,
    /// Estimate budget and timeline for a format and constraint
    Estimate {
        /// Delivery format, e.g. "Video-based modules" or video-based-modules
        #[arg(long)]
        format: Format,
        /// Project constraint, e.g. "Tight timeline" or tight-timeline
        #[arg(long)]
        constraint: Constraint,
    },
    /// Take the ten-question learning style quiz
    Quiz {
        /// Score ten comma-separated styles instead of prompting
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<LearningStyle>>,
    },
    /// List every content table
    Tables,
    /// Start an interactive session
    Shell,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if cli.no_color {
        config.no_color = true;
    }

    init_tracing(&config.log_filter);
    if config.no_color {
        colored::control::set_override(false);
    }
    debug!(?config, "Starting idbrief");

    let rng = SeededRandom::from_optional_seed(config.seed);

    match cli.command {
        Commands::Brief { estimate } => cli::generate::handle_brief(&config, rng, estimate),
        Commands::Approach => cli::generate::handle_approach(&config, rng),
        Commands::Estimate { format, constraint } => {
            cli::generate::handle_estimate(&config, format, constraint)
        }
        Commands::Quiz { answers } => match answers {
            Some(answers) => cli::quiz::score_answers(&config, &answers),
            None => cli::quiz::run_interactive(&config),
        },
        Commands::Tables => cli::generate::handle_tables(&config),
        Commands::Shell => cli::shell::run_shell(&config, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(
        "visual,Reading/Writing,solo",
        vec![LearningStyle::Visual, LearningStyle::ReadingWriting, LearningStyle::Solo]
    )]
    #[case("Kinesthetic,social", vec![LearningStyle::Kinesthetic, LearningStyle::Social])]
    #[case("reading-writing", vec![LearningStyle::ReadingWriting])]
    fn test_parses_quiz_answers(#[case] raw: &str, #[case] expected: Vec<LearningStyle>) {
        let cli = Cli::try_parse_from(["idbrief", "quiz", "--answers", raw]).unwrap();
        match cli.command {
            Commands::Quiz { answers } => assert_eq!(answers, Some(expected)),
            _ => panic!("expected quiz command"),
        }
    }

    #[rstest]
    #[case(
        "Video-based modules",
        "tight-timeline",
        Format::VideoBasedModules,
        Constraint::TightTimeline
    )]
    #[case(
        "micro-learning",
        "Limited budget",
        Format::MicroLearning,
        Constraint::LimitedBudget
    )]
    #[case("gamified", "SCORM 1.2 compliant", Format::Gamified, Constraint::Scorm12Compliant)]
    fn test_parses_estimate_labels(
        #[case] raw_format: &str,
        #[case] raw_constraint: &str,
        #[case] expected_format: Format,
        #[case] expected_constraint: Constraint,
    ) {
        let cli = Cli::try_parse_from([
            "idbrief",
            "--output",
            "json",
            "estimate",
            "--format",
            raw_format,
            "--constraint",
            raw_constraint,
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Commands::Estimate { format, constraint } => {
                assert_eq!(format, expected_format);
                assert_eq!(constraint, expected_constraint);
            }
            _ => panic!("expected estimate command"),
        }
    }

    #[test]
    fn test_rejects_unknown_style() {
        assert!(Cli::try_parse_from(["idbrief", "quiz", "--answers", "telepathic"]).is_err());
    }
}
