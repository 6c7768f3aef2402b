//! Recommendation tiers.
//!
//! The shortest night of the week selects exactly one tier. Thresholds are
//! checked in ascending order and the first match wins.

use serde::Serialize;

/// Below this many hours the week counts as severely sleep-deprived.
pub const SEVERE_BELOW: f64 = 4.0;
/// Below this many hours general improvements are recommended.
pub const IMPROVE_BELOW: f64 = 6.0;
/// Below this many hours only small tweaks are recommended.
pub const TWEAK_BELOW: f64 = 7.0;

/// Recommendation category selected by the minimum nightly value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Shortest night under 4 hours.
    SevereDeprivation,
    /// Shortest night under 6 hours.
    NeedsImprovement,
    /// Shortest night under 7 hours.
    MinorTweaks,
    /// Every night at least 7 hours.
    WellRested,
}

impl Tier {
    /// Pick the tier for the week's shortest night.
    #[must_use]
    pub fn for_minimum(min_hours: f64) -> Self {
        if min_hours < SEVERE_BELOW {
            Self::SevereDeprivation
        } else if min_hours < IMPROVE_BELOW {
            Self::NeedsImprovement
        } else if min_hours < TWEAK_BELOW {
            Self::MinorTweaks
        } else {
            Self::WellRested
        }
    }

    /// One-line summary shown above the tips.
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        match self {
            Self::SevereDeprivation => {
                "At least one night fell below 4 hours. That is severe sleep deprivation."
            }
            Self::NeedsImprovement => {
                "Your shortest night was under 6 hours. There is room to improve."
            }
            Self::MinorTweaks => "You are close. Your shortest night was just under 7 hours.",
            Self::WellRested => "Great job! You got at least 7 hours every night this week.",
        }
    }

    /// Get color name for this tier.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::SevereDeprivation => "red",
            Self::NeedsImprovement => "yellow",
            Self::MinorTweaks => "cyan",
            Self::WellRested => "green",
        }
    }

    /// Concrete suggestions for this tier.
    #[must_use]
    pub const fn tips(&self) -> &'static [&'static str] {
        match self {
            Self::SevereDeprivation => &[
                "Make sleep the priority tonight: go to bed as early as you can.",
                "Avoid driving or operating machinery while this tired.",
                "Cut caffeine after noon and skip alcohol close to bedtime.",
                "If short nights keep happening, talk to a doctor about it.",
            ],
            Self::NeedsImprovement => &[
                "Keep the same bedtime and wake-up time every day, weekends included.",
                "Put screens away at least 30 minutes before bed.",
                "Keep your bedroom dark, quiet and cool.",
                "Limit caffeine in the afternoon.",
            ],
            Self::MinorTweaks => &[
                "Try going to bed 15 to 30 minutes earlier.",
                "Wind down with a short routine: reading, stretching or a warm shower.",
                "Avoid heavy meals late in the evening.",
            ],
            Self::WellRested => &["Keep up the routine that is working for you."],
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::SevereDeprivation => "severe deprivation",
            Self::NeedsImprovement => "needs improvement",
            Self::MinorTweaks => "minor tweaks",
            Self::WellRested => "well rested",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(Tier::for_minimum(0.0), Tier::SevereDeprivation);
        assert_eq!(Tier::for_minimum(3.99), Tier::SevereDeprivation);
        assert_eq!(Tier::for_minimum(4.0), Tier::NeedsImprovement);
        assert_eq!(Tier::for_minimum(5.5), Tier::NeedsImprovement);
        assert_eq!(Tier::for_minimum(6.0), Tier::MinorTweaks);
        assert_eq!(Tier::for_minimum(6.99), Tier::MinorTweaks);
        assert_eq!(Tier::for_minimum(7.0), Tier::WellRested);
        assert_eq!(Tier::for_minimum(24.0), Tier::WellRested);
    }

    #[test]
    fn test_every_tier_has_tips() {
        for tier in [
            Tier::SevereDeprivation,
            Tier::NeedsImprovement,
            Tier::MinorTweaks,
            Tier::WellRested,
        ] {
            assert!(!tier.tips().is_empty());
            assert!(!tier.headline().is_empty());
        }
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&Tier::SevereDeprivation).unwrap();
        assert_eq!(json, "\"severe_deprivation\"");
    }
}
