//! The weekly value container.
//!
//! [`WeeklyStats`] owns one measurement per day slot and answers the aggregate
//! queries the report is built from. Min/max queries on an empty container fail
//! instead of returning a sentinel.

use serde::Serialize;

use crate::error::TrackerError;

/// An immutable sequence of daily values, day 0 first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyStats {
    values: Vec<f64>,
}

impl WeeklyStats {
    /// Create a container holding its own copy of `values`.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// The stored values in day order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of day slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Mean value, or 0.0 when there are no values.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.total() / self.values.len() as f64
    }

    /// Greatest stored value.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidArgument` if the container is empty.
    pub fn max(&self) -> Result<f64, TrackerError> {
        self.max_index().map(|i| self.values[i])
    }

    /// Least stored value.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidArgument` if the container is empty.
    pub fn min(&self) -> Result<f64, TrackerError> {
        self.min_index().map(|i| self.values[i])
    }

    /// Index of the first occurrence of the minimum.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidArgument` if the container is empty.
    pub fn min_index(&self) -> Result<usize, TrackerError> {
        self.first_index_by(|candidate, best| candidate < best)
            .ok_or_else(|| TrackerError::invalid_argument("minimum of an empty week"))
    }

    /// Index of the first occurrence of the maximum.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidArgument` if the container is empty.
    pub fn max_index(&self) -> Result<usize, TrackerError> {
        self.first_index_by(|candidate, best| candidate > best)
            .ok_or_else(|| TrackerError::invalid_argument("maximum of an empty week"))
    }

    /// Scan for the index whose value beats every earlier one under `better`.
    /// Ties keep the earlier index.
    fn first_index_by(&self, better: impl Fn(f64, f64) -> bool) -> Option<usize> {
        let first = *self.values.first()?;
        let (index, _) = self
            .values
            .iter()
            .enumerate()
            .skip(1)
            .fold((0, first), |(best_idx, best), (i, &v)| {
                if better(v, best) {
                    (i, v)
                } else {
                    (best_idx, best)
                }
            });
        Some(index)
    }
}

impl std::fmt::Display for WeeklyStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            writeln!(f, "Day {}: {}", i + 1, format_hours(*value))?;
        }
        Ok(())
    }
}

/// Round to hundredths, dropping float accumulation noise from sums.
#[must_use]
pub fn round_hours(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render an hour figure, keeping one decimal on whole numbers (`8.0`, `6.5`).
#[must_use]
pub fn format_hours(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
