//! sleeptrack - A weekly sleep tracker
//!
//! This crate collects one night of sleep per weekday from interactive input,
//! summarizes the week and recommends changes based on the shortest night.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod stats;

pub use cli::args::{Cli, OutputFormat};
pub use error::TrackerError;
pub use stats::{SleepReport, Tier, WeeklyStats};
