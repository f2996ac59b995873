// ABOUTME: Runtime configuration resolved from environment variables
// ABOUTME: Seed, output format, color and default log filter

use crate::constants::{IDBRIEF_LOG, IDBRIEF_NO_COLOR, IDBRIEF_OUTPUT, IDBRIEF_SEED};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Log filter used when neither `RUST_LOG` nor `IDBRIEF_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid seed in {var}: {source}")]
    InvalidSeed {
        var: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid output format: {0} (expected text, json or markdown)")]
    InvalidOutputFormat(String),
    #[error("Invalid boolean in {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub output: OutputFormat,
    pub no_color: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            output: OutputFormat::Text,
            no_color: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through `lookup`, which maps a variable name
    /// to its value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let seed = get(IDBRIEF_SEED)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidSeed {
                        var: IDBRIEF_SEED,
                        source,
                    })
            })
            .transpose()?;

        let output = get(IDBRIEF_OUTPUT)
            .map(|raw| raw.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();

        let no_color = match get(IDBRIEF_NO_COLOR) {
            Some(raw) => parse_bool(IDBRIEF_NO_COLOR, &raw)?,
            None => false,
        };

        let log_filter = get(IDBRIEF_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let config = Config {
            seed,
            output,
            no_color,
            log_filter,
        };
        debug!(?config, "Resolved configuration");
        Ok(config)
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            (IDBRIEF_SEED, "1234"),
            (IDBRIEF_OUTPUT, "JSON"),
            (IDBRIEF_NO_COLOR, "yes"),
            (IDBRIEF_LOG, "idbrief=debug"),
        ]))
        .unwrap();

        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.no_color);
        assert_eq!(config.log_filter, "idbrief=debug");
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config =
            Config::from_lookup(lookup_from(&[(IDBRIEF_SEED, "  "), (IDBRIEF_OUTPUT, "")])).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_seed() {
        let err = Config::from_lookup(lookup_from(&[(IDBRIEF_SEED, "-3")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed { var: IDBRIEF_SEED, .. }));
    }

    #[test]
    fn test_invalid_bool() {
        let err = Config::from_lookup(lookup_from(&[(IDBRIEF_NO_COLOR, "maybe")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid boolean in IDBRIEF_NO_COLOR: maybe");
    }

    #[rstest]
    #[case("text", OutputFormat::Text)]
    #[case("Json", OutputFormat::Json)]
    #[case("markdown", OutputFormat::Markdown)]
    #[case("md", OutputFormat::Markdown)]
    fn test_output_format_from_str(#[case] input: &str, #[case] expected: OutputFormat) {
        assert_eq!(input.parse::<OutputFormat>().unwrap(), expected);
    }

    #[test]
    fn test_output_format_rejects_unknown() {
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(ConfigError::InvalidOutputFormat(_))
        ));
    }
}
