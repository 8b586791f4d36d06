//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::Config;

/// Prefix-rule options common to every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct RuleArgs {
    /// Path to config file (logfold.toml or .logfold.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also strip everything up to the last occurrence of this text
    /// (repeatable; replaces `markers` from the config file)
    #[arg(short = 'm', long = "marker", value_name = "TEXT", allow_hyphen_values = true)]
    pub markers: Vec<String>,

    /// Do not strip the built-in ACTION[Server] / ACTION[Main] prefixes
    #[arg(long)]
    pub no_default_markers: bool,
}

impl RuleArgs {
    /// Overrides carrying only the rule options; callers fill in the rest.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            default_markers: if self.no_default_markers { Some(false) } else { None },
            markers: if self.markers.is_empty() { None } else { Some(self.markers.clone()) },
            ..CliOverrides::default()
        }
    }
}

/// Load the config file (explicit or discovered in the working directory) and
/// apply CLI overrides on top.
pub fn load_merged_config(rules: &RuleArgs, overrides: CliOverrides) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed resolving current directory")?;
    let file_config = load_config(&cwd, rules.config.as_deref())?;
    Ok(merge_cli_with_config(file_config, overrides))
}
