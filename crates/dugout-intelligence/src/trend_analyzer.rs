// ABOUTME: Longitudinal trend analysis over a player's session history
// ABOUTME: Endpoint and recent-window strategies, direction, consistency score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Longitudinal trend analysis.
//!
//! Two trend algorithms ship side by side as named strategies because both
//! exist in observed product behavior and deliberately have not been
//! unified (see DESIGN.md): the *endpoint* strategy compares the first and
//! last metric-bearing sessions in the window, while the *recent-window*
//! strategy additionally reports a recent-form average over the last four
//! value-bearing sessions. Callers choose; neither is a default.
//!
//! Fewer than two value-bearing sessions is insufficient data, surfaced as
//! `has_data = false`, never as a zero or flat result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::TrendConfig;
use crate::config::IntelligenceConfig;
use crate::models::{Metric, SessionSummary};
use crate::{TimeWindow, TrendDirection};

/// Which trend algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendStrategy {
    /// First vs. last metric-bearing session in the window; sessions
    /// between the endpoints do not influence the percent change
    Endpoint,
    /// Endpoint percent change plus a recent-form average over the last
    /// four value-bearing sessions (the average is auxiliary, not the base
    /// of the percent change)
    RecentWindow,
}

/// Longitudinal trend for one metric over a filtered session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    /// Metric the trend describes
    pub metric: Metric,
    /// Value at the first metric-bearing session in the window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_value: Option<f64>,
    /// Value at the last metric-bearing session in the window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_value: Option<f64>,
    /// Percent change from first to last; `None` when undefined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_change: Option<f64>,
    /// Recent-form average (recent-window strategy only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_average: Option<f64>,
    /// Classified direction; flat when there is no data to classify
    pub direction: TrendDirection,
    /// Whether enough sessions carried the metric to report a trend
    pub has_data: bool,
}

impl Trend {
    /// An insufficient-data trend for a metric
    #[must_use]
    pub const fn no_data(metric: Metric) -> Self {
        Self {
            metric,
            first_value: None,
            last_value: None,
            percent_change: None,
            recent_average: None,
            direction: TrendDirection::Flat,
            has_data: false,
        }
    }
}

/// Computes longitudinal trends over chronologically-ordered summaries
#[derive(Debug, Clone)]
pub struct TrendAnalyzer {
    config: TrendConfig,
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendAnalyzer {
    /// Create an analyzer from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().trend_analyzer.clone(),
        }
    }

    /// Create an analyzer with custom configuration
    #[must_use]
    pub const fn with_config(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Trend for one metric over the windowed session history.
    ///
    /// `today` anchors relative windows and is injected by the caller; the
    /// engine never reads the ambient clock.
    #[must_use]
    pub fn analyze(
        &self,
        sessions: &[SessionSummary],
        metric: Metric,
        window: TimeWindow,
        strategy: TrendStrategy,
        today: NaiveDate,
    ) -> Trend {
        // Filter to the window, then keep only sessions carrying the metric.
        // Input is expected chronological; sort defensively by date so the
        // endpoints are genuinely first and last (stable on ties).
        let mut bearing: Vec<(NaiveDate, f64)> = sessions
            .iter()
            .filter(|s| window.contains(s.session_date, today))
            .filter_map(|s| s.metric(metric).map(|v| (s.session_date, v)))
            .collect();
        bearing.sort_by_key(|(date, _)| *date);

        if bearing.len() < self.config.min_sessions_with_data {
            debug!(%metric, sessions = bearing.len(), "insufficient data for trend");
            return Trend::no_data(metric);
        }

        // First/last of the full filtered series for both strategies; the
        // recent-window strategy's average is auxiliary, not the base of
        // the percent change.
        let first_value = bearing[0].1;
        let last_value = bearing[bearing.len() - 1].1;
        let percent_change =
            (first_value != 0.0).then(|| (last_value - first_value) / first_value * 100.0);

        let recent_average = match strategy {
            TrendStrategy::Endpoint => None,
            TrendStrategy::RecentWindow => {
                let window_len = self.config.recent_form_window.min(bearing.len());
                let recent = &bearing[bearing.len() - window_len..];
                let sum: f64 = recent.iter().map(|(_, v)| v).sum();
                Some(sum / f64::from(u32::try_from(recent.len()).unwrap_or(u32::MAX)))
            }
        };

        Trend {
            metric,
            first_value: Some(first_value),
            last_value: Some(last_value),
            percent_change,
            recent_average,
            direction: self.classify(percent_change),
            has_data: true,
        }
    }

    /// Trends for every tracked metric
    #[must_use]
    pub fn analyze_all(
        &self,
        sessions: &[SessionSummary],
        window: TimeWindow,
        strategy: TrendStrategy,
        today: NaiveDate,
    ) -> Vec<Trend> {
        Metric::ALL
            .iter()
            .map(|metric| self.analyze(sessions, *metric, window, strategy, today))
            .collect()
    }

    /// Classify a percent change into a direction
    fn classify(&self, percent_change: Option<f64>) -> TrendDirection {
        let Some(pct) = percent_change else {
            return TrendDirection::Flat;
        };
        let strong = self.config.strong_trend_threshold_pct;
        if pct > strong {
            TrendDirection::StrongUp
        } else if pct > 0.0 {
            TrendDirection::Up
        } else if pct < -strong {
            TrendDirection::StrongDown
        } else if pct < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }
}

/// Share of data-bearing trends that are improving, as a rounded percentage.
///
/// Returns `None` when no trend has data; "no data" must never read as 0%.
#[must_use]
pub fn consistency_score(trends: &[Trend]) -> Option<u8> {
    let with_data: Vec<&Trend> = trends.iter().filter(|t| t.has_data).collect();
    if with_data.is_empty() {
        return None;
    }
    let improving = with_data
        .iter()
        .filter(|t| t.direction.is_improving())
        .count();
    let share = f64::from(u32::try_from(improving).unwrap_or(u32::MAX))
        / f64::from(u32::try_from(with_data.len()).unwrap_or(u32::MAX))
        * 100.0;
    Some(share.round() as u8)
}
