// ABOUTME: Random project brief generation
// ABOUTME: Draws topic, audience, constraint and format independently and composes the brief text

use crate::error::Result;
use crate::templates;
use crate::types::Brief;
use idbrief_core::constants::CLIENT_NUMBER_UPPER;
use idbrief_core::{pick, Audience, Constraint, Format, RandomSource, Topic};
use tracing::{debug, info};

/// Generates project briefs from the fixed content tables
#[derive(Debug, Default, Clone, Copy)]
pub struct BriefGenerator;

impl BriefGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draw a new brief.
    ///
    /// Draw order: topic, audience, constraint, format, client number.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Brief> {
        let topic = pick(Topic::ALL, rng)?;
        let audience = pick(Audience::ALL, rng)?;
        let constraint = pick(Constraint::ALL, rng)?;
        let format = pick(Format::ALL, rng)?;
        let client_number = rng.next_index(CLIENT_NUMBER_UPPER);

        debug!(%topic, %audience, %constraint, %format, client_number, "Drew brief components");

        let brief = self.compose(client_number, topic, audience, constraint, format);
        info!("Generated brief: {}", brief.project_title);
        Ok(brief)
    }

    /// Build a brief from already-drawn values
    pub fn compose(
        &self,
        client_number: usize,
        topic: Topic,
        audience: Audience,
        constraint: Constraint,
        format: Format,
    ) -> Brief {
        Brief {
            client_id: templates::client_label(client_number),
            project_title: templates::project_title(topic, audience),
            topic,
            audience,
            constraint,
            format,
            objectives: templates::objectives(topic, audience),
        }
    }
}
