//! Core domain types shared across the pipeline, config and rendering layers.

use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Input path used when neither the CLI nor a config file names one.
pub const DEFAULT_INPUT: &str = "debug extract.txt";
/// Output path used when neither the CLI nor a config file names one.
pub const DEFAULT_OUTPUT: &str = "debug extract processed.txt";

pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A maximal group of consecutive identical lines, collapsed to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub count: usize,
}

impl Run {
    /// Start a run holding a single occurrence of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), count: 1 }
    }

    pub fn is_repeated(&self) -> bool {
        self.count > 1
    }
}

/// Counters collected while compressing one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressStats {
    pub lines_in: usize,
    pub runs_out: usize,
    pub bytes_in: usize,
    pub bytes_out: usize,
    /// Rule name -> number of spans that rule removed.
    pub prefixes_stripped: BTreeMap<String, usize>,
}

impl CompressStats {
    /// Lines that disappeared into a preceding run.
    pub fn lines_collapsed(&self) -> usize {
        self.lines_in.saturating_sub(self.runs_out)
    }

    pub fn to_report_value(&self) -> Value {
        json!({
            "lines_in": self.lines_in,
            "runs_out": self.runs_out,
            "lines_collapsed": self.lines_collapsed(),
            "bytes_in": self.bytes_in,
            "bytes_out": self.bytes_out,
            "prefixes_stripped": self.prefixes_stripped,
        })
    }
}

/// A user-supplied regex rule from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomPrefixRule {
    #[serde(default)]
    pub name: Option<String>,
    pub pattern: String,
}

/// Fully merged configuration (defaults < config file < CLI).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Keep the built-in `ACTION[Server]: ` and `ACTION[Main]: ` markers.
    pub default_markers: bool,
    /// Extra literal markers, applied after the built-in ones in list order.
    pub markers: Vec<String>,
    pub custom_rules: Vec<CustomPrefixRule>,
    pub report: Option<PathBuf>,
    pub include_timestamp: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            default_markers: true,
            markers: Vec::new(),
            custom_rules: Vec::new(),
            report: None,
            include_timestamp: true,
        }
    }
}
