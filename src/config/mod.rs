//! Configuration management for sleeptrack.
//!
//! This module handles loading configuration from `~/.sleeptrack/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, ReportConfig};
