// ABOUTME: One-shot generation commands
// ABOUTME: brief, approach, estimate and tables, each printed in the configured output format

use idbrief_cli::render::{
    render_estimate, render_state, render_tables, ContentTables, EstimateReport,
};
use idbrief_config::Config;
use idbrief_core::{Constraint, Format, SeededRandom};
use idbrief_session::{Action, Session};

pub fn handle_brief(
    config: &Config,
    rng: SeededRandom,
    with_estimate: bool,
) -> anyhow::Result<()> {
    let mut session = Session::new(rng);
    session.dispatch(Action::GenerateBrief)?;
    if with_estimate {
        session.dispatch(Action::GenerateEstimate)?;
    }

    println!("{}", render_state(session.state(), config.output)?);
    Ok(())
}

pub fn handle_approach(config: &Config, rng: SeededRandom) -> anyhow::Result<()> {
    let mut session = Session::new(rng);
    session.dispatch(Action::GenerateApproach)?;

    println!("{}", render_state(session.state(), config.output)?);
    Ok(())
}

pub fn handle_estimate(
    config: &Config,
    format: Format,
    constraint: Constraint,
) -> anyhow::Result<()> {
    let report = EstimateReport::new(format, constraint);
    println!("{}", render_estimate(&report, config.output)?);
    Ok(())
}

pub fn handle_tables(config: &Config) -> anyhow::Result<()> {
    println!("{}", render_tables(&ContentTables::default(), config.output)?);
    Ok(())
}
