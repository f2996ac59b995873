// ABOUTME: idbrief generator library - briefs, approaches and estimates
// ABOUTME: Random composition over the core tables plus the fixed budget/timeline rules

pub mod approach_generator;
pub mod brief_generator;
pub mod error;
pub mod estimator;
pub mod templates;
pub mod types;

pub use approach_generator::ApproachGenerator;
pub use brief_generator::BriefGenerator;
pub use error::{GeneratorError, Result};
pub use estimator::{estimate_budget_and_timeline, explain_estimate};
pub use types::{Approach, Brief, Estimate};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::approach_generator::ApproachGenerator;
    pub use crate::brief_generator::BriefGenerator;
    pub use crate::error::{GeneratorError, Result};
    pub use crate::estimator::estimate_budget_and_timeline;
    pub use crate::types::{Approach, Brief, Estimate};
}
