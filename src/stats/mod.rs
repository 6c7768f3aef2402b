//! Weekly sleep statistics.
//!
//! Provides the weekly value container and everything derived from it:
//! - Sum, mean, minimum and maximum
//! - Weekday naming for day slots
//! - Recommendation tiers keyed off the shortest night
//! - A serializable report snapshot

pub mod day;
pub mod report;
pub mod tier;
pub mod weekly;

pub use day::Weekday;
pub use report::{DaySummary, SleepReport};
pub use tier::Tier;
pub use weekly::{format_hours, round_hours, WeeklyStats};
