// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across idbrief

// Randomness
pub const IDBRIEF_SEED: &str = "IDBRIEF_SEED";

// Output
pub const IDBRIEF_OUTPUT: &str = "IDBRIEF_OUTPUT";
pub const IDBRIEF_NO_COLOR: &str = "IDBRIEF_NO_COLOR";

// Logging
pub const IDBRIEF_LOG: &str = "IDBRIEF_LOG";
pub const RUST_LOG: &str = "RUST_LOG";
