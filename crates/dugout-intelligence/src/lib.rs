// ABOUTME: Swing grading, trend analysis, and coaching intelligence engine
// ABOUTME: Pure synchronous functions over immutable session data; no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! # Dugout Intelligence
//!
//! The performance-grading and trend-analysis engine: raw per-swing sensor
//! readings in, summary metrics, 20-80 scouting grades, longitudinal
//! trends, milestones, goal progress, and coaching tips out.
//!
//! Every component is a pure function over immutable inputs. There is no
//! I/O, no shared mutable state, and no ambient clock: callers inject the
//! reference date wherever "today" matters, which keeps the engine
//! deterministic under test and safe to call concurrently.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rule-based coaching-tip selection
pub mod coaching_tips;
/// Engine configuration (metrics, grading, trends, tips)
pub mod config;
/// 20-80 scouting-grade calculation against cohort benchmarks
pub mod grading;
/// Goal progress percentages and days-left reporting
pub mod goal_progress;
/// First-crossing milestone detection over session history
pub mod milestone_engine;
/// Per-session metric normalization and hot-zone aggregation
pub mod session_metrics;
/// Domain constants for swing analytics
pub mod swing_constants;
/// Longitudinal trend analysis with selectable strategies
pub mod trend_analyzer;

// Re-export the domain crate under the paths the engine modules use
pub use dugout_core::errors;
pub use dugout_core::models;

pub use coaching_tips::{CoachingTip, CoachingTipGenerator};
pub use config::IntelligenceConfig;
pub use goal_progress::{GoalProgress, GoalProgressTracker};
pub use grading::GradeCalculator;
pub use milestone_engine::{Milestone, MilestoneEngine};
pub use session_metrics::SessionMetricsCalculator;
pub use trend_analyzer::{consistency_score, Trend, TrendAnalyzer, TrendStrategy};

/// Direction of a longitudinal trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Percent change above the strong threshold
    StrongUp,
    /// Positive percent change at or below the strong threshold
    Up,
    /// No measurable change (or no data to measure)
    Flat,
    /// Negative percent change at or above the negated strong threshold
    Down,
    /// Percent change below the negated strong threshold
    StrongDown,
}

impl TrendDirection {
    /// Whether this direction counts as improvement for consistency scoring
    #[must_use]
    pub const fn is_improving(self) -> bool {
        matches!(self, Self::Up | Self::StrongUp)
    }
}

/// Time window a trend query is evaluated over.
///
/// Sessions are compared by calendar date only; both bounds are inclusive.
/// The reference date is always injected by the caller; the engine never
/// reads the ambient clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    /// No date filter
    All,
    /// Sessions within the last N days of the reference date
    LastDays(u32),
    /// Sessions between two fixed dates
    Custom {
        /// First day of the window
        start: NaiveDate,
        /// Last day of the window
        end: NaiveDate,
    },
}

impl TimeWindow {
    /// Whether a session date falls inside the window relative to `today`
    #[must_use]
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match *self {
            Self::All => true,
            Self::LastDays(days) => {
                let start = today - chrono::Duration::days(i64::from(days));
                date >= start && date <= today
            }
            Self::Custom { start, end } => date >= start && date <= end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn last_days_window_is_inclusive_on_both_ends() {
        let today = date(2025, 6, 30);
        let window = TimeWindow::LastDays(30);
        assert!(window.contains(date(2025, 6, 30), today));
        assert!(window.contains(date(2025, 5, 31), today));
        assert!(!window.contains(date(2025, 5, 30), today));
        assert!(!window.contains(date(2025, 7, 1), today));
    }

    #[test]
    fn custom_window_ignores_the_reference_date() {
        let window = TimeWindow::Custom {
            start: date(2025, 1, 1),
            end: date(2025, 1, 31),
        };
        let today = date(2025, 12, 1);
        assert!(window.contains(date(2025, 1, 15), today));
        assert!(!window.contains(date(2025, 2, 1), today));
    }

    #[test]
    fn direction_improvement_classification() {
        assert!(TrendDirection::Up.is_improving());
        assert!(TrendDirection::StrongUp.is_improving());
        assert!(!TrendDirection::Flat.is_improving());
        assert!(!TrendDirection::Down.is_improving());
        assert!(!TrendDirection::StrongDown.is_improving());
    }
}
