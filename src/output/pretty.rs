//! Pretty (human-readable) output formatting for sleeptrack.

use colored::Colorize;

use crate::config::ReportConfig;
use crate::stats::{format_hours, round_hours, SleepReport};

fn header(title: &str) -> String {
    format!("===== {title} =====").bold().to_string()
}

/// Format a report for the terminal.
#[must_use]
pub fn format_report_pretty(report: &SleepReport, layout: &ReportConfig) -> String {
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push(header("Sleep Analysis"));
    lines.push(format!(
        "Total sleep for the week: {} hours",
        format_hours(round_hours(report.total))
    ));
    lines.push(format!(
        "Average sleep per night: {:.2} hours",
        report.average
    ));
    lines.push(format!("Maximum sleep: {} hours", format_hours(report.max)));
    lines.push(format!("Minimum sleep: {} hours", format_hours(report.min)));

    if layout.show_daily_values {
        lines.push(String::new());
        lines.push(header("All Daily Values"));
        lines.extend(report.week.to_string().lines().map(str::to_string));
    }

    lines.push(String::new());
    lines.push(format!(
        "Your shortest night was {} (Day {}) with {} hours.",
        report.worst_day.name.bold(),
        report.worst_day.day_number,
        format_hours(report.worst_day.hours)
    ));
    lines.push(format!(
        "Your longest night was {} (Day {}) with {} hours.",
        report.best_day.name.bold(),
        report.best_day.day_number,
        format_hours(report.best_day.hours)
    ));

    lines.push(String::new());
    lines.push(header("Insights"));
    lines.push(
        report
            .tier
            .headline()
            .color(report.tier.color())
            .bold()
            .to_string(),
    );

    if layout.show_tips {
        for tip in report.tips {
            lines.push(format!("  {} {tip}", "•".color(report.tier.color())));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Tier, WeeklyStats};

    fn sample_report() -> SleepReport {
        SleepReport::build(&WeeklyStats::new(&[8.0, 7.0, 6.5, 9.0, 7.5, 8.0, 3.0])).unwrap()
    }

    #[test]
    fn test_pretty_figures() {
        let output = format_report_pretty(&sample_report(), &ReportConfig::default());

        assert!(output.contains("Sleep Analysis"));
        assert!(output.contains("Total sleep for the week: 49.0 hours"));
        assert!(output.contains("Average sleep per night: 7.00 hours"));
        assert!(output.contains("Maximum sleep: 9.0 hours"));
        assert!(output.contains("Minimum sleep: 3.0 hours"));
        assert!(output.contains("(Day 7) with 3.0 hours"));
    }

    #[test]
    fn test_pretty_total_hides_float_noise() {
        let report = SleepReport::build(&WeeklyStats::new(&[0.1; 7])).unwrap();
        let output = format_report_pretty(&report, &ReportConfig::default());

        assert!(output.contains("Total sleep for the week: 0.7 hours"));
    }

    #[test]
    fn test_pretty_daily_listing() {
        let output = format_report_pretty(&sample_report(), &ReportConfig::default());

        assert!(output.contains("All Daily Values"));
        for day in 1..=7 {
            assert!(output.contains(&format!("Day {day}: ")));
        }
        assert!(output.contains("Day 3: 6.5"));
    }

    #[test]
    fn test_pretty_tips_follow_tier() {
        let output = format_report_pretty(&sample_report(), &ReportConfig::default());
        for tip in Tier::SevereDeprivation.tips() {
            assert!(output.contains(tip));
        }
    }

    #[test]
    fn test_pretty_respects_layout() {
        let layout = ReportConfig {
            show_daily_values: false,
            show_tips: false,
        };
        let output = format_report_pretty(&sample_report(), &layout);

        assert!(!output.contains("All Daily Values"));
        assert!(!output.contains("Day 1: "));
        assert!(output.contains("Insights"));
        for tip in Tier::SevereDeprivation.tips() {
            assert!(!output.contains(tip));
        }
    }
}
