//! Info command implementation

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use super::utils::{load_merged_config, RuleArgs};
use crate::domain::Run;
use crate::pipeline::{CompressOutcome, LogCompressor};
use crate::strip::PrefixStripper;
use crate::utils::{escape_control, format_with_commas, truncate_to_width};

const MAX_LINE_WIDTH: usize = 80;

#[derive(Args)]
pub struct InfoArgs {
    /// Log file to analyze [default: "debug extract.txt"]
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub rules: RuleArgs,

    /// Number of most repeated lines to list
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let mut overrides = args.rules.overrides();
    overrides.input = args.input;

    let config = load_merged_config(&args.rules, overrides)?;
    let compressor = LogCompressor::new(PrefixStripper::from_config(&config));
    let outcome = compressor.analyze(&config.input)?;

    println!(
        "{}",
        render_info(&config.input, &outcome, &compressor.stripper().rule_names(), args.top)
    );
    Ok(())
}

/// Render the info summary. Rules are listed in application order, including
/// rules that never fired.
fn render_info(input: &Path, outcome: &CompressOutcome, rules: &[&str], top: usize) -> String {
    let stats = &outcome.stats;
    let mut out = vec![
        format!("Input: {}", input.display()),
        format!("Lines: {}", format_with_commas(stats.lines_in)),
        format!("Runs: {}", format_with_commas(stats.runs_out)),
        format!("Collapsed lines: {}", format_with_commas(stats.lines_collapsed())),
    ];

    if rules.is_empty() {
        out.push("Prefixes stripped: none (no rules)".to_string());
    } else {
        out.push("Prefixes stripped:".to_string());
        for rule in rules {
            let count = stats.prefixes_stripped.get(*rule).copied().unwrap_or(0);
            out.push(format!("  {}: {}", rule, format_with_commas(count)));
        }
    }

    let repeated = most_repeated(&outcome.runs, top);
    if repeated.is_empty() {
        out.push("Most repeated: none".to_string());
    } else {
        out.push("Most repeated:".to_string());
        for run in repeated {
            let count = format_with_commas(run.count);
            out.push(format!("  (×{}) {}", count, display_line(&run.text)));
        }
    }

    out.join("\n")
}

/// Repeated runs ordered by count (descending), ties broken by first appearance.
fn most_repeated(runs: &[Run], top: usize) -> Vec<&Run> {
    let mut repeated: Vec<(usize, &Run)> =
        runs.iter().enumerate().filter(|(_, run)| run.is_repeated()).collect();
    repeated.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(&b.0)));
    repeated.into_iter().take(top).map(|(_, run)| run).collect()
}

fn display_line(text: &str) -> String {
    if text.is_empty() {
        return "<empty line>".to_string();
    }
    truncate_to_width(&escape_control(text), MAX_LINE_WIDTH)
}
