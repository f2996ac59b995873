// ABOUTME: Quiz tally and winner selection
// ABOUTME: Strictly-greater scan in style declaration order, so ties go to the earlier style

use idbrief_core::LearningStyle;
use serde::{Deserialize, Serialize};

/// Per-style answer counts, kept in style declaration order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTally {
    counts: [usize; 6],
}

impl StyleTally {
    fn slot(style: LearningStyle) -> usize {
        match style {
            LearningStyle::Visual => 0,
            LearningStyle::Auditory => 1,
            LearningStyle::Kinesthetic => 2,
            LearningStyle::ReadingWriting => 3,
            LearningStyle::Social => 4,
            LearningStyle::Solo => 5,
        }
    }

    pub fn record(&mut self, style: LearningStyle) {
        self.counts[Self::slot(style)] += 1;
    }

    pub fn count(&self, style: LearningStyle) -> usize {
        self.counts[Self::slot(style)]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(style, count)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (LearningStyle, usize)> + '_ {
        LearningStyle::ALL
            .iter()
            .map(move |style| (*style, self.count(*style)))
    }
}

pub fn tally(answers: &[LearningStyle]) -> StyleTally {
    let mut tally = StyleTally::default();
    for style in answers {
        tally.record(*style);
    }
    tally
}

/// Style with the strictly greatest count; the first declared style wins
/// ties. `None` only when nothing was counted.
pub fn dominant_style(tally: &StyleTally) -> Option<LearningStyle> {
    let mut winner = None;
    let mut max_count = 0;
    for (style, count) in tally.iter() {
        if count > max_count {
            winner = Some(style);
            max_count = count;
        }
    }
    winner
}

pub fn result_summary(style: LearningStyle) -> String {
    format!(
        "Based on your responses, you may thrive with a {} approach. Explore strategies, \
         activities, and materials that align with this style for more effective learning!",
        style
    )
}
