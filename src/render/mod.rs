//! Output rendering (compressed text, JSON reports)

pub mod report;
pub mod text;

pub use report::{write_report, ReportOptions};
pub use text::{render_run, render_runs};
