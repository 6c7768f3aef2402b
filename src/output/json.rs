//! JSON output formatting for sleeptrack.

use crate::error::TrackerError;
use crate::stats::SleepReport;

/// Format a report as JSON
///
/// # Errors
///
/// Returns `TrackerError::Parse` if JSON serialization fails.
pub fn format_report_json(report: &SleepReport) -> Result<String, TrackerError> {
    Ok(serde_json::to_string_pretty(report)?)
}
