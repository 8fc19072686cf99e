// ABOUTME: Model module wiring for dugout-core
// ABOUTME: Re-exports swing, session, benchmark, and goal types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Domain models for swing-sensor data and its derived records.

/// Cohort benchmark rows and the (level, metric) lookup table
pub mod benchmark;
/// Coach-defined goals and their lifecycle status
pub mod goal;
/// Session summaries, metric vectors, and grade vectors
pub mod session;
/// Raw per-swing sensor records and strike-zone labels
pub mod swing;

pub use benchmark::{BenchmarkTable, LevelBenchmark};
pub use goal::{Goal, GoalStatus};
pub use session::{GradeVector, Metric, MetricVector, SessionSource, SessionSummary};
pub use swing::{StrikeZone, SwingRecord};
