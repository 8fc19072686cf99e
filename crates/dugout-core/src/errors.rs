// ABOUTME: Error taxonomy for the swing grading engine
// ABOUTME: Degenerate benchmarks, missing benchmark rows, and invalid zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Unified error handling for the Dugout engine.
//!
//! Errors here are value-level and local: a degenerate benchmark fails the
//! single grade computation it was supplied to, never a whole session
//! summary. Insufficient data and missing metrics are *not* errors; they
//! propagate as `None` / `has_data = false` so the presentation layer can
//! render "N/A" instead of a misleading zero.

use thiserror::Error;

use crate::models::Metric;

/// Result alias used throughout the engine
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the grading and benchmark layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Benchmark with a non-positive or non-finite standard deviation was
    /// supplied to the grade calculator. Callers skip grading for that
    /// metric rather than aborting the session summary.
    #[error("degenerate benchmark for {metric}: standard deviation must be positive and finite")]
    DegenerateBenchmark {
        /// Metric whose benchmark was degenerate
        metric: Metric,
    },

    /// No benchmark row exists for the requested (level, metric) pair
    #[error("no benchmark for level `{level}` and metric {metric}")]
    MissingBenchmark {
        /// Cohort level that was looked up
        level: String,
        /// Metric that was looked up
        metric: Metric,
    },

    /// Strike-zone label outside the 13-cell layout (1-9 in-zone, 10-13 chase)
    #[error("strike zone out of range: {0} (expected 1..=13)")]
    InvalidZone(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_benchmark_names_the_metric() {
        let err = AppError::DegenerateBenchmark {
            metric: Metric::AvgExitVelocity,
        };
        assert!(err.to_string().contains("avgEv"));
    }

    #[test]
    fn invalid_zone_reports_the_label() {
        assert_eq!(
            AppError::InvalidZone(14).to_string(),
            "strike zone out of range: 14 (expected 1..=13)"
        );
    }
}
