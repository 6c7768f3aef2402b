//! Command-line interface for sleeptrack.

pub mod args;
pub mod commands;
