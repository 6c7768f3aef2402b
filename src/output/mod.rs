//! Output formatting for sleeptrack.
//!
//! This module provides formatters for displaying a weekly report in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::ReportConfig;
use crate::error::TrackerError;
use crate::stats::SleepReport;

pub use json::*;
pub use pretty::*;

/// Format a report based on output format
///
/// # Errors
///
/// Returns `TrackerError::Parse` if JSON serialization fails.
pub fn format_report(
    report: &SleepReport,
    format: OutputFormat,
    layout: &ReportConfig,
) -> Result<String, TrackerError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(report, layout)),
        OutputFormat::Json => format_report_json(report),
    }
}
