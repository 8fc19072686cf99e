// ABOUTME: 20-80 scouting-grade calculation against cohort benchmarks
// ABOUTME: Raw grades are unclamped; display clamping is a caller concern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Benchmark-normalized grading.
//!
//! A grade is `50 + 10 × (value − mean) / sd`, rounded to the nearest
//! integer and deliberately left unclamped: the raw grade is the canonical
//! stored value so milestone target math round-trips exactly. A benchmark
//! with `sd <= 0` (or non-finite moments) is a domain error for the single
//! grade computation it was supplied to; vector grading skips that metric
//! and carries on.

use tracing::{debug, warn};

use crate::config::intelligence::GradingConfig;
use crate::config::IntelligenceConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{BenchmarkTable, GradeVector, LevelBenchmark, Metric, MetricVector};

/// Maps metric values to 20-80 scouting grades using level benchmarks
#[derive(Debug, Clone)]
pub struct GradeCalculator {
    config: GradingConfig,
}

impl Default for GradeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeCalculator {
    /// Create a calculator from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().grading.clone(),
        }
    }

    /// Create a calculator with custom configuration
    #[must_use]
    pub const fn with_config(config: GradingConfig) -> Self {
        Self { config }
    }

    /// Raw (unclamped) grade for a metric value against its benchmark.
    ///
    /// # Errors
    /// Returns [`AppError::DegenerateBenchmark`] when the benchmark's
    /// standard deviation is non-positive or its moments are non-finite.
    pub fn grade(&self, value: f64, benchmark: &LevelBenchmark) -> AppResult<i32> {
        if benchmark.is_degenerate() {
            return Err(AppError::DegenerateBenchmark {
                metric: benchmark.metric,
            });
        }
        let raw = self.config.points_per_sd.mul_add(
            (value - benchmark.mean) / benchmark.sd,
            self.config.scale_midpoint,
        );
        Ok(raw.round() as i32)
    }

    /// Metric value that maps to a given grade, the inverse of [`Self::grade`].
    ///
    /// Purely benchmark-derived: it does not depend on any player's
    /// readings. Used for milestone targets.
    ///
    /// # Errors
    /// Returns [`AppError::DegenerateBenchmark`] under the same conditions
    /// as [`Self::grade`], so milestone math never consumes a target the
    /// forward formula could not have produced.
    pub fn target_value(&self, grade: i32, benchmark: &LevelBenchmark) -> AppResult<f64> {
        if benchmark.is_degenerate() {
            return Err(AppError::DegenerateBenchmark {
                metric: benchmark.metric,
            });
        }
        let sd_steps = (f64::from(grade) - self.config.scale_midpoint) / self.config.points_per_sd;
        Ok(sd_steps.mul_add(benchmark.sd, benchmark.mean))
    }

    /// Clamp a raw grade to the bounded display range
    #[must_use]
    pub fn display_grade(&self, raw: i32) -> i32 {
        raw.clamp(
            self.config.display_grade_floor,
            self.config.display_grade_ceiling,
        )
    }

    /// Grade every metric of a vector against a level's benchmarks.
    ///
    /// Degrades metric-by-metric: a missing value yields no grade, a
    /// missing benchmark row is logged at debug, and a degenerate benchmark
    /// is logged at warn; none of them abort the remaining metrics.
    #[must_use]
    pub fn grade_vector(
        &self,
        metrics: &MetricVector,
        benchmarks: &BenchmarkTable,
        level: &str,
    ) -> GradeVector {
        let mut grades = GradeVector::default();
        for metric in Metric::ALL {
            let Some(value) = metrics.value(metric) else {
                continue;
            };
            let Some(benchmark) = benchmarks.get(level, metric) else {
                debug!(%metric, level, "no benchmark row, skipping grade");
                continue;
            };
            match self.grade(value, benchmark) {
                Ok(grade) => grades.set(metric, Some(grade)),
                Err(e) => warn!(%metric, level, error = %e, "skipping degenerate benchmark"),
            }
        }
        grades
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benchmark(metric: Metric, mean: f64, sd: f64) -> LevelBenchmark {
        LevelBenchmark {
            level: "High School".to_owned(),
            metric,
            mean,
            sd,
        }
    }

    fn calculator() -> GradeCalculator {
        GradeCalculator::with_config(GradingConfig::default())
    }

    #[test]
    fn spec_scenario_two_sd_above_mean() {
        let bm = benchmark(Metric::AvgExitVelocity, 80.0, 5.0);
        assert_eq!(calculator().grade(90.0, &bm).unwrap(), 70);
    }

    #[test]
    fn mean_grades_fifty_and_rounds_to_nearest() {
        let bm = benchmark(Metric::AvgBatSpeed, 65.0, 4.0);
        let calc = calculator();
        assert_eq!(calc.grade(65.0, &bm).unwrap(), 50);
        // 0.26 SD above => 52.6 => 53
        assert_eq!(calc.grade(66.04, &bm).unwrap(), 53);
        // 0.24 SD below => 47.6 => 48
        assert_eq!(calc.grade(64.04, &bm).unwrap(), 48);
    }

    #[test]
    fn raw_grades_are_unclamped_but_display_grades_are_not() {
        let bm = benchmark(Metric::MaxExitVelocity, 90.0, 2.0);
        let calc = calculator();
        let raw = calc.grade(100.0, &bm).unwrap();
        assert_eq!(raw, 100);
        assert_eq!(calc.display_grade(raw), 80);
        let low = calc.grade(82.0, &bm).unwrap();
        assert_eq!(low, 10);
        assert_eq!(calc.display_grade(low), 20);
    }

    #[test]
    fn zero_sd_is_a_degenerate_benchmark() {
        let bm = benchmark(Metric::BarrelPct, 30.0, 0.0);
        let calc = calculator();
        assert_eq!(
            calc.grade(40.0, &bm).unwrap_err(),
            AppError::DegenerateBenchmark {
                metric: Metric::BarrelPct
            }
        );
        assert!(calc.target_value(60, &bm).is_err());
    }

    #[test]
    fn grade_round_trips_through_target_value() {
        let bm = benchmark(Metric::AvgExitVelocity, 82.5, 4.25);
        let calc = calculator();
        for grade in [20, 40, 50, 60, 70, 80, 95] {
            let target = calc.target_value(grade, &bm).unwrap();
            assert_eq!(calc.grade(target, &bm).unwrap(), grade);
        }
    }

    #[test]
    fn vector_grading_degrades_metric_by_metric() {
        let metrics = MetricVector {
            avg_ev: Some(90.0),
            max_ev: Some(101.0),
            barrel_pct: Some(25.0),
            ..MetricVector::default()
        };

        let benchmarks = BenchmarkTable::from_rows(vec![
            benchmark(Metric::AvgExitVelocity, 80.0, 5.0),
            // degenerate row: skipped, not fatal
            benchmark(Metric::BarrelPct, 20.0, 0.0),
        ]);

        let grades = calculator().grade_vector(&metrics, &benchmarks, "High School");
        assert_eq!(grades.avg_ev, Some(70));
        // no benchmark row for max_ev
        assert_eq!(grades.max_ev, None);
        // degenerate benchmark for barrel_pct
        assert_eq!(grades.barrel_pct, None);
        // missing value never becomes a zero grade
        assert_eq!(grades.avg_bs, None);
    }
}
