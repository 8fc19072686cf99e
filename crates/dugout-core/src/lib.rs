// ABOUTME: Core domain crate for the Dugout swing analytics platform
// ABOUTME: Shared models and error types consumed by the intelligence engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! # Dugout Core
//!
//! Domain models shared across the Dugout platform: per-swing sensor
//! records, per-session summaries, cohort benchmarks, and coaching goals.
//! This crate carries no analysis logic; the engine lives in
//! `dugout-intelligence`. It holds only the data shapes, serde wire names,
//! and the error taxonomy.

/// Unified error types for grading and benchmark lookups
pub mod errors;
/// Swing, session, benchmark, and goal models
pub mod models;

pub use errors::{AppError, AppResult};
pub use models::{
    BenchmarkTable, Goal, GoalStatus, GradeVector, LevelBenchmark, Metric, MetricVector,
    SessionSource, SessionSummary, StrikeZone, SwingRecord,
};
