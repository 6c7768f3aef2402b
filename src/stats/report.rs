//! Report snapshot built from a week of values.

use serde::Serialize;

use super::day::Weekday;
use super::tier::Tier;
use super::weekly::WeeklyStats;
use crate::error::TrackerError;

/// One notable day of the week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    /// Zero-based slot index.
    pub index: usize,
    /// One-based day number as shown in the listing.
    pub day_number: usize,
    /// Weekday name, or `Day <n>` past the seventh slot.
    pub name: String,
    /// Hours recorded for the day.
    pub hours: f64,
}

impl DaySummary {
    fn at(stats: &WeeklyStats, index: usize) -> Self {
        let name = Weekday::from_index(index)
            .map_or_else(|| format!("Day {}", index + 1), |d| d.name().to_string());
        Self {
            index,
            day_number: index + 1,
            name,
            hours: stats.values()[index],
        }
    }
}

/// Everything the driver prints about a week.
#[derive(Debug, Clone, Serialize)]
pub struct SleepReport {
    /// The recorded week.
    pub week: WeeklyStats,
    /// Total hours.
    pub total: f64,
    /// Mean hours per night.
    pub average: f64,
    /// Longest night.
    pub max: f64,
    /// Shortest night.
    pub min: f64,
    /// First day holding the shortest night.
    pub worst_day: DaySummary,
    /// First day holding the longest night.
    pub best_day: DaySummary,
    /// Recommendation tier from the shortest night.
    pub tier: Tier,
    /// Tips for the tier.
    pub tips: &'static [&'static str],
}

impl SleepReport {
    /// Build a report from a recorded week.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidArgument` if the week holds no values.
    pub fn build(week: &WeeklyStats) -> Result<Self, TrackerError> {
        let min = week.min()?;
        let max = week.max()?;
        let worst_day = DaySummary::at(week, week.min_index()?);
        let best_day = DaySummary::at(week, week.max_index()?);
        let tier = Tier::for_minimum(min);

        Ok(Self {
            week: week.clone(),
            total: week.total(),
            average: week.average(),
            max,
            min,
            worst_day,
            best_day,
            tier,
            tips: tier.tips(),
        })
    }
}
