// ABOUTME: Random pedagogical approach generation
// ABOUTME: Draws a learning style, theory and design model and explains how to combine them

use crate::error::Result;
use crate::templates;
use crate::types::Approach;
use idbrief_core::{pick, IdModel, LearningStyle, RandomSource, Theory};
use tracing::{debug, info};

/// Generates approaches independently of any brief
#[derive(Debug, Default, Clone, Copy)]
pub struct ApproachGenerator;

impl ApproachGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draw a new approach. Draw order: style, theory, model.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Approach> {
        let style = pick(LearningStyle::ALL, rng)?;
        let theory = pick(Theory::ALL, rng)?;
        let model = pick(IdModel::ALL, rng)?;

        debug!(%style, %theory, %model, "Drew approach components");

        let approach = self.compose(style, theory, model);
        info!(
            "Generated approach: {} / {} / {}",
            approach.style, approach.theory, approach.model
        );
        Ok(approach)
    }

    pub fn compose(&self, style: LearningStyle, theory: Theory, model: IdModel) -> Approach {
        Approach {
            style,
            theory,
            model,
            synergy_explanation: templates::synergy_explanation(style, theory, model),
            application_steps: templates::application_steps(style, theory, model),
        }
    }
}
