//! logfold: fold repeated log lines into counted runs
//!
//! Known prefixes (by default everything up to the last `ACTION[Server]: ` or
//! `ACTION[Main]: ` on a line) are stripped first, then consecutive identical
//! lines collapse into one line annotated with ` (×N)`.

pub mod cli;
pub mod config;
pub mod domain;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod strip;
pub mod utils;

pub use domain::{CompressStats, Config, Run};
pub use error::LogfoldError;
pub use pipeline::{compress_text, CompressOutcome, LogCompressor};
pub use strip::PrefixStripper;
