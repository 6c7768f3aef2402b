//! Token sources.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::TrackerError;

/// A stream of whitespace-separated input tokens.
pub trait TokenSource {
    /// Next token, reading more input as needed.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Io` if the underlying reader fails.
    fn next_token(&mut self) -> Result<Option<String>, TrackerError>;

    /// Drop whatever remains of the current line.
    fn discard_line(&mut self);
}

/// Splits a buffered reader into tokens one line at a time.
pub struct LineTokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> LineTokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> TokenSource for LineTokens<R> {
    fn next_token(&mut self) -> Result<Option<String>, TrackerError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn discard_line(&mut self) {
        self.pending.clear();
    }
}
