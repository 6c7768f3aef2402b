//! Per-day prompting with validation.

use std::io::Write;

use colored::Colorize;
use tracing::debug;

use super::source::TokenSource;
use crate::error::TrackerError;
use crate::stats::Weekday;

/// Largest accepted number of hours for one night.
pub const MAX_HOURS: f64 = 24.0;

/// Why an entry was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursRejection {
    /// The token is not a number.
    NotANumber,
    /// The number is below zero.
    Negative,
    /// The number is above [`MAX_HOURS`].
    TooLarge,
}

impl HoursRejection {
    /// Message shown before re-prompting.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NotANumber => "Error: Invalid input. Please enter a valid number.",
            Self::Negative => "Error: Sleep hours cannot be negative. Please try again.",
            Self::TooLarge => "Error: Sleep hours cannot exceed 24. Please try again.",
        }
    }
}

/// Parse and validate one token as a night's sleep.
///
/// # Errors
///
/// Returns the [`HoursRejection`] describing the violated rule.
pub fn parse_hours(token: &str) -> Result<f64, HoursRejection> {
    let hours: f64 = token.parse().map_err(|_| HoursRejection::NotANumber)?;
    if hours.is_nan() {
        return Err(HoursRejection::NotANumber);
    }
    if hours < 0.0 {
        return Err(HoursRejection::Negative);
    }
    if hours > MAX_HOURS {
        return Err(HoursRejection::TooLarge);
    }
    // `-0` parses to negative zero; normalize it.
    Ok(hours + 0.0)
}

/// Asks for one value per day and re-prompts until it is valid.
pub struct DayPrompter<S, W> {
    source: S,
    out: W,
}

impl<S: TokenSource, W: Write> DayPrompter<S, W> {
    /// Create a prompter reading from `source` and writing prompts to `out`.
    pub const fn new(source: S, out: W) -> Self {
        Self { source, out }
    }

    /// Print the opening banner.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Io` if writing fails.
    pub fn welcome(&mut self) -> Result<(), TrackerError> {
        writeln!(self.out, "{}", "===== Sleep Tracker =====".cyan().bold())?;
        writeln!(self.out, "Track your sleep hours for the past 7 days.")?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Read a valid value for `day`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InputClosed` if input ends first, or
    /// `TrackerError::Io` on read/write failure.
    pub fn read_day(&mut self, day: Weekday) -> Result<f64, TrackerError> {
        loop {
            write!(self.out, "Enter hours of sleep for {day}: ")?;
            self.out.flush()?;

            let token = self.source.next_token()?.ok_or(TrackerError::InputClosed)?;
            match parse_hours(&token) {
                Ok(hours) => return Ok(hours),
                Err(rejection) => {
                    debug!(%day, token = %token, ?rejection, "rejected sleep entry");
                    if rejection == HoursRejection::NotANumber {
                        self.source.discard_line();
                    }
                    writeln!(self.out, "{}", rejection.message().yellow())?;
                }
            }
        }
    }

    /// Read values for every day of the week, Monday first.
    ///
    /// # Errors
    ///
    /// See [`DayPrompter::read_day`].
    pub fn read_week(&mut self) -> Result<Vec<f64>, TrackerError> {
        Weekday::ALL
            .iter()
            .map(|day| self.read_day(*day))
            .collect()
    }
}
