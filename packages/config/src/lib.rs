// ABOUTME: idbrief configuration package
// ABOUTME: Environment variable names and the resolved runtime Config

pub mod constants;
pub mod settings;

pub use settings::{Config, ConfigError, OutputFormat, DEFAULT_LOG_FILTER};
