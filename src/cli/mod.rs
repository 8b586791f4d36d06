//! Command-line interface for logfold
//!
//! Provides `compress` and `info` subcommands sharing one set of prefix-rule options.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod compress;
mod info;
mod utils;

/// Fold repeated log lines into counted runs after stripping known prefixes
#[derive(Parser)]
#[command(name = "logfold")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a log file, collapsing consecutive duplicate lines
    Compress(compress::CompressArgs),

    /// Show what compressing a log would do without writing anything
    Info(info::InfoArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence; WARN is only the fallback when it is unset or invalid.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) if cli.verbose => filter.add_directive(Level::DEBUG.into()),
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(if cli.verbose { "debug" } else { "warn" }),
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Compress(args) => compress::run(args),
        Commands::Info(args) => info::run(args),
    }
}
