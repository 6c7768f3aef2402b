//! The interactive tracking session.
//!
//! Prompts for the week, builds the statistics and formats the report.

use std::io::Write;

use tracing::info;

use crate::cli::args::OutputFormat;
use crate::config::ReportConfig;
use crate::error::TrackerError;
use crate::input::{DayPrompter, TokenSource};
use crate::output::format_report;
use crate::stats::{SleepReport, WeeklyStats};

/// Run one tracking session.
///
/// Prompts are written to `prompts`; the formatted report is returned.
///
/// # Errors
///
/// Returns `TrackerError::InputClosed` if input ends before all seven days are
/// entered, or an I/O or serialization error.
pub fn track<S: TokenSource, W: Write>(
    source: S,
    prompts: W,
    format: OutputFormat,
    layout: &ReportConfig,
) -> Result<String, TrackerError> {
    let mut prompter = DayPrompter::new(source, prompts);
    prompter.welcome()?;
    let values = prompter.read_week()?;

    let week = WeeklyStats::new(&values);
    let report = SleepReport::build(&week)?;
    info!(
        total = report.total,
        average = report.average,
        tier = %report.tier,
        "weekly report ready"
    );

    format_report(&report, format, layout)
}
