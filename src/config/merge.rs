//! Merge CLI overrides into file config

use crate::domain::Config;
use std::path::PathBuf;

/// Values given on the command line. `None` means "not given"; the file
/// config (or the default) is kept for that key.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub default_markers: Option<bool>,
    /// Replaces the config file's `markers` list when given.
    pub markers: Option<Vec<String>>,
    pub report: Option<PathBuf>,
    pub include_timestamp: Option<bool>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(default_markers) = cli.default_markers {
        config.default_markers = default_markers;
    }
    if let Some(markers) = cli.markers {
        config.markers = markers;
    }
    if let Some(report) = cli.report {
        config.report = Some(report);
    }
    if let Some(include_timestamp) = cli.include_timestamp {
        config.include_timestamp = include_timestamp;
    }
    config
}
