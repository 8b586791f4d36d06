//! Compress command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{load_merged_config, RuleArgs};
use crate::pipeline::LogCompressor;
use crate::render::{write_report, ReportOptions};
use crate::strip::PrefixStripper;
use crate::utils::format_with_commas;

#[derive(Args)]
pub struct CompressArgs {
    /// Log file to compress [default: "debug extract.txt"]
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Where to write the compressed log [default: "debug extract processed.txt"]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub rules: RuleArgs,

    /// Also write a JSON report with line, run and prefix statistics
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Omit the timestamp from the report for reproducible diffs
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(args: CompressArgs) -> Result<()> {
    let mut overrides = args.rules.overrides();
    overrides.input = args.input;
    overrides.output = args.output;
    overrides.report = args.report;
    overrides.include_timestamp = if args.no_timestamp { Some(false) } else { None };

    let config = load_merged_config(&args.rules, overrides)?;
    let compressor = LogCompressor::new(PrefixStripper::from_config(&config));
    tracing::debug!("Prefix rules in order: {:?}", compressor.stripper().rule_names());

    let outcome = compressor.run(&config.input, &config.output)?;
    println!(
        "Compressed {} lines into {} runs -> {}",
        format_with_commas(outcome.stats.lines_in),
        format_with_commas(outcome.stats.runs_out),
        config.output.display()
    );

    if let Some(report_path) = &config.report {
        let options = ReportOptions {
            input: &config.input,
            output: &config.output,
            input_sha256: &outcome.input_sha256,
            rules: compressor.stripper().rule_names().into_iter().map(str::to_string).collect(),
            include_timestamp: config.include_timestamp,
        };
        write_report(report_path, &outcome.stats, &options)?;
        println!("Report written to {}", report_path.display());
    }

    Ok(())
}
