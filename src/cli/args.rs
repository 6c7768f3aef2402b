use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ColorSetting;

#[derive(Parser)]
#[command(name = "sleeptrack")]
#[command(about = "Track a week of sleep and get recommendations")]
#[command(long_about = "sleeptrack - A weekly sleep tracker

Asks for the hours you slept on each day of the past week (Monday to Sunday),
then prints your total, average, longest and shortest nights, and tips based
on your shortest night.

Each answer must be a number between 0 and 24. Invalid answers are rejected
and the same day is asked again.

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

CONFIGURATION:
  Defaults are read from ~/.sleeptrack/config.yaml when it exists.")]
#[command(version)]
pub struct Cli {
    /// Output format for the weekly report
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Overrides `general.default_output` from the config file.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// When to use colors in pretty output
    #[arg(long, value_enum)]
    pub color: Option<ColorSetting>,

    /// Path to the config file
    #[arg(short, long, env = "SLEEPTRACK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for the weekly report.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}
