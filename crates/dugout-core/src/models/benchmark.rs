// ABOUTME: Cohort benchmark rows and the (level, metric) lookup table
// ABOUTME: Owned by the cohort-statistics service; read-only to the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Level benchmarks used to normalize raw metrics into 20-80 grades.
//!
//! One row exists per (level, metric) pair, e.g. ("High School", `avgEv`).
//! The table is supplied by the cohort-statistics collaborator and treated
//! as a read-only lookup here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::session::Metric;

/// Cohort mean and standard deviation for one metric at one play level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelBenchmark {
    /// Play level the cohort represents (e.g. "High School", "College")
    pub level: String,
    /// Metric the row normalizes
    pub metric: Metric,
    /// Cohort mean
    pub mean: f64,
    /// Cohort standard deviation
    pub sd: f64,
}

impl LevelBenchmark {
    /// Whether this row cannot be used for grading (sd must be positive and
    /// both moments finite)
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.sd > 0.0) || !self.sd.is_finite() || !self.mean.is_finite()
    }
}

/// Read-only lookup of [`LevelBenchmark`] rows keyed by (level, metric)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkTable {
    rows: HashMap<String, HashMap<Metric, LevelBenchmark>>,
}

impl BenchmarkTable {
    /// Build a table from rows; a later duplicate (level, metric) row wins
    #[must_use]
    pub fn from_rows(rows: Vec<LevelBenchmark>) -> Self {
        let mut table = Self::default();
        for row in rows {
            table
                .rows
                .entry(row.level.clone())
                .or_default()
                .insert(row.metric, row);
        }
        table
    }

    /// Parse a table from the JSON row array the cohort service exports.
    ///
    /// # Errors
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let rows: Vec<LevelBenchmark> = serde_json::from_str(json)?;
        Ok(Self::from_rows(rows))
    }

    /// Look up the row for a (level, metric) pair
    #[must_use]
    pub fn get(&self, level: &str, metric: Metric) -> Option<&LevelBenchmark> {
        self.rows.get(level).and_then(|by_metric| by_metric.get(&metric))
    }

    /// Look up a row, surfacing its absence as an error.
    ///
    /// # Errors
    /// Returns [`AppError::MissingBenchmark`] when no row exists.
    pub fn require(&self, level: &str, metric: Metric) -> AppResult<&LevelBenchmark> {
        self.get(level, metric).ok_or_else(|| AppError::MissingBenchmark {
            level: level.to_owned(),
            metric,
        })
    }

    /// Number of rows in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    /// Whether the table holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(level: &str, metric: Metric, mean: f64, sd: f64) -> LevelBenchmark {
        LevelBenchmark {
            level: level.to_owned(),
            metric,
            mean,
            sd,
        }
    }

    #[test]
    fn lookup_is_keyed_by_level_and_metric() {
        let table = BenchmarkTable::from_rows(vec![
            row("High School", Metric::AvgExitVelocity, 80.0, 5.0),
            row("College", Metric::AvgExitVelocity, 88.0, 4.0),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("High School", Metric::AvgExitVelocity).map(|b| b.mean),
            Some(80.0)
        );
        assert_eq!(table.get("College", Metric::AvgExitVelocity).map(|b| b.mean), Some(88.0));
        assert!(table.get("High School", Metric::MaxBatSpeed).is_none());
    }

    #[test]
    fn require_reports_missing_rows() {
        let table = BenchmarkTable::default();
        let err = table.require("College", Metric::BarrelPct).unwrap_err();
        assert_eq!(
            err,
            AppError::MissingBenchmark {
                level: "College".to_owned(),
                metric: Metric::BarrelPct,
            }
        );
    }

    #[test]
    fn degenerate_rows_are_detected() {
        assert!(row("HS", Metric::AvgExitVelocity, 80.0, 0.0).is_degenerate());
        assert!(row("HS", Metric::AvgExitVelocity, 80.0, -1.0).is_degenerate());
        assert!(row("HS", Metric::AvgExitVelocity, f64::NAN, 5.0).is_degenerate());
        assert!(!row("HS", Metric::AvgExitVelocity, 80.0, 5.0).is_degenerate());
    }

    #[test]
    fn parses_the_cohort_service_export() {
        let json = r#"[{"level":"High School","metric":"avgEv","mean":80.0,"sd":5.0}]"#;
        let table = BenchmarkTable::from_json(json).unwrap();
        assert_eq!(
            table.get("High School", Metric::AvgExitVelocity).map(|b| b.sd),
            Some(5.0)
        );
    }
}
