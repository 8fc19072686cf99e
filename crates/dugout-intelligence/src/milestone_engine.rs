// ABOUTME: First-crossing milestone detection over a player's session history
// ABOUTME: Benchmark-derived grade targets at 40/50/60/70/80, earliest session wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Milestone detection.
//!
//! For each metric and each scouting threshold (40/50/60/70/80), the target
//! value is derived purely from the level benchmark, independent of the
//! player's own readings, and the *earliest* session whose metric value
//! reaches it is recorded, not the session with the maximum value. Running
//! the engine again after new sessions arrive never moves an already
//! achieved milestone's date, because earlier sessions are scanned first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::grading::GradeCalculator;
use crate::models::{BenchmarkTable, Metric, SessionSummary};
use crate::swing_constants::scouting_scale::GRADE_MILESTONES;

/// A grade threshold a player crossed, and the session that first crossed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Metric the milestone belongs to
    pub metric: Metric,
    /// Scouting grade threshold (one of 40/50/60/70/80)
    pub grade: i32,
    /// Scouting label for the threshold
    pub label: String,
    /// Benchmark-derived metric value the threshold maps to
    pub target_value: f64,
    /// Date of the first session that reached the target
    pub achieved_date: NaiveDate,
    /// The session that reached the target
    pub session_id: Uuid,
}

/// Scans session history for first crossings of scouting-grade thresholds
#[derive(Debug, Clone, Default)]
pub struct MilestoneEngine {
    grading: GradeCalculator,
}

impl MilestoneEngine {
    /// Create an engine from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            grading: GradeCalculator::new(),
        }
    }

    /// Create an engine with a custom grade calculator
    #[must_use]
    pub const fn with_calculator(grading: GradeCalculator) -> Self {
        Self { grading }
    }

    /// All milestones the player has ever crossed, sorted ascending by
    /// achieved date (ties by metric then grade, for determinism).
    ///
    /// `sessions` must be in chronological order; the scan takes the first
    /// match per (metric, threshold). Metrics without a usable benchmark
    /// are skipped and contribute no milestones.
    #[must_use]
    pub fn milestones(
        &self,
        sessions: &[SessionSummary],
        benchmarks: &BenchmarkTable,
        level: &str,
    ) -> Vec<Milestone> {
        let mut achieved = Vec::new();

        for metric in Metric::ALL {
            let Some(benchmark) = benchmarks.get(level, metric) else {
                debug!(%metric, level, "no benchmark row, skipping milestones");
                continue;
            };

            for (grade, label) in GRADE_MILESTONES {
                let target_value = match self.grading.target_value(grade, benchmark) {
                    Ok(value) => value,
                    Err(e) => {
                        warn!(%metric, level, error = %e, "skipping milestones for metric");
                        break;
                    }
                };

                // Earliest crossing wins; later, larger values never move it
                let first_crossing = sessions
                    .iter()
                    .find(|s| s.metric(metric).is_some_and(|v| v >= target_value));

                if let Some(session) = first_crossing {
                    achieved.push(Milestone {
                        metric,
                        grade,
                        label: label.to_owned(),
                        target_value,
                        achieved_date: session.session_date,
                        session_id: session.session_id,
                    });
                }
            }
        }

        achieved.sort_by(|a, b| {
            a.achieved_date
                .cmp(&b.achieved_date)
                .then(a.metric.cmp(&b.metric))
                .then(a.grade.cmp(&b.grade))
        });
        achieved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GradeVector, LevelBenchmark, MetricVector, SessionSource};

    const EPS: f64 = 1e-9;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session(session_date: NaiveDate, avg_ev: Option<f64>) -> SessionSummary {
        SessionSummary {
            session_id: Uuid::new_v4(),
            session_date,
            session_type: SessionSource::Hittrax,
            total_swings: 12,
            metrics: MetricVector {
                avg_ev,
                ..MetricVector::default()
            },
            grades: GradeVector::default(),
        }
    }

    fn benchmarks() -> BenchmarkTable {
        // mean 80, sd 5: targets are 75 (40), 80 (50), 85 (60), 90 (70), 95 (80)
        BenchmarkTable::from_rows(vec![LevelBenchmark {
            level: "High School".to_owned(),
            metric: Metric::AvgExitVelocity,
            mean: 80.0,
            sd: 5.0,
        }])
    }

    fn engine() -> MilestoneEngine {
        MilestoneEngine::with_calculator(GradeCalculator::with_config(
            crate::config::intelligence::GradingConfig::default(),
        ))
    }

    #[test]
    fn earliest_session_wins_not_the_maximum() {
        let sessions = vec![
            session(date(2025, 3, 1), Some(78.0)),
            session(date(2025, 3, 8), Some(86.0)),
            session(date(2025, 3, 15), Some(92.0)),
            // a later, bigger session must not move earlier milestones
            session(date(2025, 3, 22), Some(93.0)),
        ];
        let milestones = engine().milestones(&sessions, &benchmarks(), "High School");

        // thresholds crossed: 40 (75), 50 (80), 60 (85) first on 3/8; 70 (90) on 3/15
        assert_eq!(milestones.len(), 4);
        assert_eq!(milestones[0].grade, 40);
        assert_eq!(milestones[0].achieved_date, date(2025, 3, 1));
        assert_eq!(milestones[1].grade, 50);
        assert_eq!(milestones[1].achieved_date, date(2025, 3, 8));
        assert_eq!(milestones[2].grade, 60);
        assert_eq!(milestones[2].achieved_date, date(2025, 3, 8));
        assert_eq!(milestones[3].grade, 70);
        assert_eq!(milestones[3].achieved_date, date(2025, 3, 15));
        assert_eq!(milestones[3].label, "Well Above Average");
        assert!((milestones[3].target_value - 90.0).abs() < EPS);
    }

    #[test]
    fn unreached_thresholds_emit_nothing() {
        let sessions = vec![session(date(2025, 3, 1), Some(74.0))];
        let milestones = engine().milestones(&sessions, &benchmarks(), "High School");
        assert!(milestones.is_empty());
    }

    #[test]
    fn milestone_dates_are_monotone_in_threshold_order() {
        let sessions = vec![
            session(date(2025, 3, 1), Some(76.0)),
            session(date(2025, 3, 8), Some(81.0)),
            session(date(2025, 3, 15), Some(87.0)),
            session(date(2025, 3, 22), Some(96.0)),
        ];
        let milestones = engine().milestones(&sessions, &benchmarks(), "High School");
        assert_eq!(milestones.len(), 5);
        let mut per_metric: Vec<&Milestone> = milestones
            .iter()
            .filter(|m| m.metric == Metric::AvgExitVelocity)
            .collect();
        per_metric.sort_by_key(|m| m.grade);
        for pair in per_metric.windows(2) {
            assert!(pair[0].achieved_date <= pair[1].achieved_date);
        }
    }

    #[test]
    fn rerunning_after_new_sessions_is_idempotent_for_old_milestones() {
        let mut sessions = vec![
            session(date(2025, 3, 1), Some(86.0)),
            session(date(2025, 3, 8), Some(84.0)),
        ];
        let eng = engine();
        let before = eng.milestones(&sessions, &benchmarks(), "High School");

        sessions.push(session(date(2025, 3, 15), Some(91.0)));
        let after = eng.milestones(&sessions, &benchmarks(), "High School");

        // previously achieved milestones keep their dates and sessions
        for old in &before {
            let still = after
                .iter()
                .find(|m| m.metric == old.metric && m.grade == old.grade)
                .unwrap();
            assert_eq!(still.achieved_date, old.achieved_date);
            assert_eq!(still.session_id, old.session_id);
        }
        // and the new session only adds the newly crossed threshold
        assert_eq!(after.len(), before.len() + 1);
    }

    #[test]
    fn degenerate_benchmark_contributes_no_milestones() {
        let table = BenchmarkTable::from_rows(vec![LevelBenchmark {
            level: "High School".to_owned(),
            metric: Metric::AvgExitVelocity,
            mean: 80.0,
            sd: 0.0,
        }]);
        let sessions = vec![session(date(2025, 3, 1), Some(99.0))];
        let milestones = engine().milestones(&sessions, &table, "High School");
        assert!(milestones.is_empty());
    }

    #[test]
    fn missing_metric_sessions_are_skipped() {
        let sessions = vec![
            session(date(2025, 3, 1), None),
            session(date(2025, 3, 8), Some(85.0)),
        ];
        let milestones = engine().milestones(&sessions, &benchmarks(), "High School");
        assert!(!milestones.is_empty());
        for m in &milestones {
            assert_eq!(m.achieved_date, date(2025, 3, 8));
        }
    }
}
