// ABOUTME: Fixed numeric constants shared across idbrief packages
// ABOUTME: Client label range and quiz length

/// Client labels are drawn from `[0, CLIENT_NUMBER_UPPER)`
pub const CLIENT_NUMBER_UPPER: usize = 1000;

/// Number of questions in the learning style quiz
pub const QUIZ_LENGTH: usize = 10;

/// Number of objectives attached to every brief
pub const OBJECTIVE_COUNT: usize = 3;

/// Number of steps in an approach's application plan
pub const APPLICATION_STEP_COUNT: usize = 5;
