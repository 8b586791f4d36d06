//! Report JSON generation.

use crate::domain::{CompressStats, REPORT_SCHEMA_VERSION};
use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::{Map, Value};
use std::path::Path;

pub struct ReportOptions<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub input_sha256: &'a str,
    /// Rule names in application order.
    pub rules: Vec<String>,
    pub include_timestamp: bool,
}

pub fn write_report(
    report_path: &Path,
    stats: &CompressStats,
    options: &ReportOptions<'_>,
) -> Result<()> {
    let mut report = Map::new();
    report.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.to_string()));
    if options.include_timestamp {
        report.insert(
            "generated_at".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
        );
    }
    report.insert("input".to_string(), Value::String(options.input.display().to_string()));
    report.insert("output".to_string(), Value::String(options.output.display().to_string()));
    report.insert("input_sha256".to_string(), Value::String(options.input_sha256.to_string()));
    report.insert("stats".to_string(), stats.to_report_value());
    report.insert("rules".to_string(), serde_json::to_value(&options.rules)?);

    if let Some(parent) = report_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed creating report directory: {}", parent.display())
            })?;
        }
    }
    std::fs::write(report_path, serde_json::to_string_pretty(&Value::Object(report))?)
        .with_context(|| format!("Failed writing report: {}", report_path.display()))?;
    Ok(())
}
