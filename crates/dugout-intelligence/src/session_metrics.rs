// ABOUTME: Per-session metric normalization from raw swing records
// ABOUTME: Means, maxima, barrel rate, top-5% launch angle, hot-zone averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Session metric normalization.
//!
//! Reduces one session's ordered raw swings into the fixed
//! [`MetricVector`]. Every aggregate is computed only from swings where the
//! underlying reading is present; `total_swings` counts all swings
//! regardless of field completeness. An empty swing list is not an error;
//! it yields an empty vector and a zero count.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::config::intelligence::MetricsConfig;
use crate::config::IntelligenceConfig;
use crate::grading::GradeCalculator;
use crate::models::{
    BenchmarkTable, MetricVector, SessionSource, SessionSummary, StrikeZone, SwingRecord,
};

/// Convert a collection length to `f64` for averaging
#[inline]
fn len_as_f64(len: usize) -> f64 {
    f64::from(u32::try_from(len).unwrap_or(u32::MAX))
}

/// Normalizes raw swings into per-session summary metrics
#[derive(Debug, Clone)]
pub struct SessionMetricsCalculator {
    config: MetricsConfig,
}

impl Default for SessionMetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMetricsCalculator {
    /// Create a calculator from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().metrics.clone(),
        }
    }

    /// Create a calculator with custom configuration
    #[must_use]
    pub const fn with_config(config: MetricsConfig) -> Self {
        Self { config }
    }

    /// Reduce a session's raw swings to its summary-metric vector
    #[must_use]
    pub fn calculate(&self, swings: &[SwingRecord]) -> MetricVector {
        if swings.is_empty() {
            debug!("empty swing list, returning empty metric vector");
            return MetricVector::default();
        }

        MetricVector {
            avg_ev: mean(swings.iter().filter_map(|s| s.exit_velocity)),
            max_ev: max(swings.iter().filter_map(|s| s.exit_velocity)),
            avg_bs: mean(swings.iter().filter_map(|s| s.bat_speed)),
            max_bs: max(swings.iter().filter_map(|s| s.bat_speed)),
            barrel_pct: Some(self.barrel_pct(swings)),
            avg_la: mean(swings.iter().filter_map(|s| s.launch_angle)),
            launch_angle_top5: self.launch_angle_top_pct(swings),
            hot_zone_evs: hot_zone_averages(swings),
        }
    }

    /// Build the full immutable summary for one session, grading each metric
    /// against the player's level benchmarks (degrading metric-by-metric).
    #[must_use]
    pub fn summarize(
        &self,
        session_id: Uuid,
        session_date: NaiveDate,
        session_type: SessionSource,
        swings: &[SwingRecord],
        benchmarks: &BenchmarkTable,
        level: &str,
    ) -> SessionSummary {
        let metrics = self.calculate(swings);
        let grades = GradeCalculator::new().grade_vector(&metrics, benchmarks, level);
        SessionSummary {
            session_id,
            session_date,
            session_type,
            total_swings: u32::try_from(swings.len()).unwrap_or(u32::MAX),
            metrics,
            grades,
        }
    }

    /// Share of all swings at or above the hard-hit threshold, in percent.
    ///
    /// Launch angle is ignored by contract; the denominator is the full
    /// swing count, not the exit-velocity-bearing subset.
    fn barrel_pct(&self, swings: &[SwingRecord]) -> f64 {
        let barrels = swings
            .iter()
            .filter(|s| {
                s.exit_velocity
                    .is_some_and(|ev| ev >= self.config.barrel_ev_threshold_mph)
            })
            .count();
        len_as_f64(barrels) / len_as_f64(swings.len()) * 100.0
    }

    /// Mean launch angle among the top fraction of swings by exit velocity.
    ///
    /// The subset holds at least one swing whenever any swing reports exit
    /// velocity; exit-velocity ties keep original swing order (stable sort).
    fn launch_angle_top_pct(&self, swings: &[SwingRecord]) -> Option<f64> {
        let mut ranked: Vec<&SwingRecord> =
            swings.iter().filter(|s| s.exit_velocity.is_some()).collect();
        if ranked.is_empty() {
            return None;
        }

        // Stable sort keeps original order among equal exit velocities
        ranked.sort_by(|a, b| {
            let ev_a = a.exit_velocity.unwrap_or(f64::NEG_INFINITY);
            let ev_b = b.exit_velocity.unwrap_or(f64::NEG_INFINITY);
            ev_b.total_cmp(&ev_a)
        });

        let count = ((len_as_f64(ranked.len()) * self.config.top_exit_velocity_fraction).floor()
            as usize)
            .max(1);

        mean(ranked.iter().take(count).filter_map(|s| s.launch_angle))
    }
}

/// Arithmetic mean over present values, `None` when no value is present
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0_usize;
    for value in values {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / len_as_f64(count))
}

/// Maximum over present values, `None` when no value is present
fn max(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.reduce(f64::max)
}

/// Mean exit velocity per strike-zone cell; cells with no swings are omitted
fn hot_zone_averages(swings: &[SwingRecord]) -> BTreeMap<StrikeZone, f64> {
    let mut sums: BTreeMap<StrikeZone, (f64, usize)> = BTreeMap::new();
    for swing in swings {
        if let (Some(zone), Some(ev)) = (swing.strike_zone, swing.exit_velocity) {
            let entry = sums.entry(zone).or_insert((0.0, 0));
            entry.0 += ev;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(zone, (sum, count))| (zone, sum / len_as_f64(count)))
        .collect()
}
