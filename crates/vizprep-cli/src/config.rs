//! TOML configuration for the CLI.
//!
//! Every field is optional; a missing file section keeps the built-in
//! defaults. Command-line flags are applied on top of the loaded values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use vizprep_model::DomainOptions;

/// Gradient stops drawn by the map legend.
pub const DEFAULT_LEGEND_SEGMENTS: usize = 40;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Domain derivation defaults shared by every subcommand.
    pub domains: DomainOptions,
    pub choropleth: ChoroplethConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoroplethConfig {
    pub key_column: Option<String>,
    pub value_column: Option<String>,
    pub legend_segments: usize,
}

impl Default for ChoroplethConfig {
    fn default() -> Self {
        Self {
            key_column: None,
            value_column: None,
            legend_segments: DEFAULT_LEGEND_SEGMENTS,
        }
    }
}

/// Loads the config file, or the defaults when no path was given.
///
/// An explicitly named file that cannot be read or parsed is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let config = parse_config(&content).with_context(|| format!("parse config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_keeps_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.choropleth.legend_segments, DEFAULT_LEGEND_SEGMENTS);
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config = parse_config(
            r#"
[domains]
force_zero_floor = false
gamma = 0.8

[choropleth]
key_column = "County"
"#,
        )
        .unwrap();
        assert!(!config.domains.force_zero_floor);
        assert!((config.domains.gamma - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.domains.diverging_tick_count, 5);
        assert_eq!(config.choropleth.key_column.as_deref(), Some("County"));
        assert_eq!(config.choropleth.value_column, None);
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert!(parse_config("[domains]\ngamma = \"high\"\n").is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}
