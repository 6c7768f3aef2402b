//! Interactive input for sleeptrack.
//!
//! Values are read as whitespace-separated tokens from any [`TokenSource`],
//! so the prompter can be driven by stdin or by a scripted buffer in tests.

mod prompt;
mod source;

pub use prompt::{parse_hours, DayPrompter, HoursRejection, MAX_HOURS};
pub use source::{LineTokens, TokenSource};
