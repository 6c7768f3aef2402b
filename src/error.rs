//! Error types for sleeptrack.

use thiserror::Error;

/// Errors produced by the sleep tracker.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A query was made that the data cannot answer (e.g. min of an empty week).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Standard input ended before every day had a value.
    #[error("Input ended before all 7 days were entered")]
    InputClosed,

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TrackerError {
    /// Shorthand for an [`TrackerError::InvalidArgument`] error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
