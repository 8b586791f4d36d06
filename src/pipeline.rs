//! The read → strip → split → encode → write pipeline.
//!
//! Stripping is done per line after splitting. No prefix span can reach across
//! a newline, so this gives the same lines as stripping the whole text first.

use crate::domain::{CompressStats, Run};
use crate::encode::{run_length_encode, split_lines};
use crate::error::{LogfoldError, Result};
use crate::render::render_runs;
use crate::strip::PrefixStripper;
use crate::utils::{decode_text, sha256_hex, write_atomic};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub struct CompressOutcome {
    /// Rendered output text, ready to be written.
    pub content: String,
    pub runs: Vec<Run>,
    pub stats: CompressStats,
    /// Digest of the raw input bytes, before any UTF-8 replacement.
    pub input_sha256: String,
}

/// Compress `text` in memory.
pub fn compress_text(text: &str, stripper: &PrefixStripper) -> CompressOutcome {
    compress_decoded(text.as_bytes(), text, stripper)
}

/// Compress `text`, which was decoded from `raw`. Byte counts and the digest
/// describe `raw`.
fn compress_decoded(raw: &[u8], text: &str, stripper: &PrefixStripper) -> CompressOutcome {
    let mut prefixes_stripped = BTreeMap::new();
    let lines: Vec<String> = split_lines(text)
        .into_iter()
        .map(|line| stripper.strip_counted(line, &mut prefixes_stripped))
        .collect();
    let lines_in = lines.len();
    debug!("Stripped prefixes on {} lines: {:?}", lines_in, prefixes_stripped);

    let runs = run_length_encode(lines);
    debug!("Encoded {} lines into {} runs", lines_in, runs.len());

    let content = render_runs(&runs);
    let stats = CompressStats {
        lines_in,
        runs_out: runs.len(),
        bytes_in: raw.len(),
        bytes_out: content.len(),
        prefixes_stripped,
    };

    CompressOutcome { content, runs, stats, input_sha256: sha256_hex(raw) }
}

/// File-to-file log compression with a fixed set of prefix rules.
pub struct LogCompressor {
    stripper: PrefixStripper,
}

impl Default for LogCompressor {
    fn default() -> Self {
        Self::new(PrefixStripper::new())
    }
}

impl LogCompressor {
    pub fn new(stripper: PrefixStripper) -> Self {
        Self { stripper }
    }

    pub fn stripper(&self) -> &PrefixStripper {
        &self.stripper
    }

    /// Read `input`, compress it in memory without writing anything.
    pub fn analyze(&self, input: &Path) -> Result<CompressOutcome> {
        let raw = fs::read(input)
            .map_err(|source| LogfoldError::ReadInput { path: input.to_path_buf(), source })?;
        debug!("Read {} bytes from {}", raw.len(), input.display());
        let text = decode_text(&raw, input);
        Ok(compress_decoded(&raw, &text, &self.stripper))
    }

    /// Compress `input` into `output`, replacing `output` atomically.
    pub fn run(&self, input: &Path, output: &Path) -> Result<CompressOutcome> {
        let outcome = self.analyze(input)?;
        write_atomic(output, outcome.content.as_bytes())
            .map_err(|source| LogfoldError::WriteOutput { path: output.to_path_buf(), source })?;
        info!(
            "Compressed {} lines into {} runs: {} -> {}",
            outcome.stats.lines_in,
            outcome.stats.runs_out,
            input.display(),
            output.display()
        );
        Ok(outcome)
    }
}
