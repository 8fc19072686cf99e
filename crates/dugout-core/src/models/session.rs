// ABOUTME: Per-session summary models: metric vectors, grade vectors, summaries
// ABOUTME: Metric is the closed key enum shared by grading, trends, and goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Session summaries and the fixed metric vocabulary.
//!
//! A [`SessionSummary`] is built once from a session's raw swings and is
//! immutable thereafter; it is only recomputed when the underlying swing set
//! changes (re-upload or edit), never mutated in place.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::swing::StrikeZone;

/// The closed set of summary-metric keys.
///
/// Every engine component dispatches on this enum rather than on string
/// keys, so adding a metric is a data change in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Mean exit velocity across swings that report it (mph)
    #[serde(rename = "avgEv")]
    AvgExitVelocity,
    /// Peak exit velocity (mph)
    #[serde(rename = "maxEv")]
    MaxExitVelocity,
    /// Mean bat speed (mph)
    #[serde(rename = "avgBs")]
    AvgBatSpeed,
    /// Peak bat speed (mph)
    #[serde(rename = "maxBs")]
    MaxBatSpeed,
    /// Share of swings at or above the hard-hit exit-velocity threshold (%)
    #[serde(rename = "barrelPct")]
    BarrelPct,
    /// Mean launch angle (degrees)
    #[serde(rename = "avgLa")]
    AvgLaunchAngle,
    /// Mean launch angle among the top 5% of swings by exit velocity (degrees)
    #[serde(rename = "launchAngleTop5")]
    LaunchAngleTop5,
}

impl Metric {
    /// Every tracked metric, in canonical display order
    pub const ALL: [Self; 7] = [
        Self::AvgExitVelocity,
        Self::MaxExitVelocity,
        Self::AvgBatSpeed,
        Self::MaxBatSpeed,
        Self::BarrelPct,
        Self::AvgLaunchAngle,
        Self::LaunchAngleTop5,
    ];

    /// The wire key used in serialized vectors (`avgEv`, `barrelPct`, ...)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AvgExitVelocity => "avgEv",
            Self::MaxExitVelocity => "maxEv",
            Self::AvgBatSpeed => "avgBs",
            Self::MaxBatSpeed => "maxBs",
            Self::BarrelPct => "barrelPct",
            Self::AvgLaunchAngle => "avgLa",
            Self::LaunchAngleTop5 => "launchAngleTop5",
        }
    }

    /// Human-readable label for reports and coaching copy
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AvgExitVelocity => "Average Exit Velocity",
            Self::MaxExitVelocity => "Max Exit Velocity",
            Self::AvgBatSpeed => "Average Bat Speed",
            Self::MaxBatSpeed => "Max Bat Speed",
            Self::BarrelPct => "Barrel Rate",
            Self::AvgLaunchAngle => "Average Launch Angle",
            Self::LaunchAngleTop5 => "Launch Angle (Top 5% EV)",
        }
    }

    /// Unit suffix for display
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::AvgExitVelocity | Self::MaxExitVelocity | Self::AvgBatSpeed | Self::MaxBatSpeed => {
                "mph"
            }
            Self::BarrelPct => "%",
            Self::AvgLaunchAngle | Self::LaunchAngleTop5 => "deg",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which sensor produced a session's swings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionSource {
    /// HitTrax cage system (ball-flight data)
    Hittrax,
    /// Blast Motion bat sensor (bat-path data)
    Blast,
}

impl fmt::Display for SessionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hittrax => f.write_str("hittrax"),
            Self::Blast => f.write_str("blast"),
        }
    }
}

/// Fixed summary-metric vector reduced from one session's raw swings.
///
/// Every scalar is computed only from swings where the underlying reading is
/// present; a metric with no contributing swings is `None`, never zero.
/// Zones with no swings are omitted from `hot_zone_evs`, not set to null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricVector {
    /// Mean exit velocity (mph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ev: Option<f64>,
    /// Peak exit velocity (mph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ev: Option<f64>,
    /// Mean bat speed (mph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_bs: Option<f64>,
    /// Peak bat speed (mph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bs: Option<f64>,
    /// Hard-hit rate over all swings in the session (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barrel_pct: Option<f64>,
    /// Mean launch angle (degrees)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_la: Option<f64>,
    /// Mean launch angle among the top-5%-by-exit-velocity swings (degrees)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_angle_top5: Option<f64>,
    /// Mean exit velocity per strike-zone cell, absent cells omitted
    #[serde(rename = "hotZoneEVs", skip_serializing_if = "BTreeMap::is_empty", default)]
    pub hot_zone_evs: BTreeMap<StrikeZone, f64>,
}

impl MetricVector {
    /// Value of a scalar metric by key
    #[must_use]
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::AvgExitVelocity => self.avg_ev,
            Metric::MaxExitVelocity => self.max_ev,
            Metric::AvgBatSpeed => self.avg_bs,
            Metric::MaxBatSpeed => self.max_bs,
            Metric::BarrelPct => self.barrel_pct,
            Metric::AvgLaunchAngle => self.avg_la,
            Metric::LaunchAngleTop5 => self.launch_angle_top5,
        }
    }

    /// Set a scalar metric by key
    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        match metric {
            Metric::AvgExitVelocity => self.avg_ev = value,
            Metric::MaxExitVelocity => self.max_ev = value,
            Metric::AvgBatSpeed => self.avg_bs = value,
            Metric::MaxBatSpeed => self.max_bs = value,
            Metric::BarrelPct => self.barrel_pct = value,
            Metric::AvgLaunchAngle => self.avg_la = value,
            Metric::LaunchAngleTop5 => self.launch_angle_top5 = value,
        }
    }

    /// Whether no scalar metric and no zone carries a value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Metric::ALL.iter().all(|m| self.value(*m).is_none()) && self.hot_zone_evs.is_empty()
    }
}

/// Raw 20-80 scouting grades mirroring [`MetricVector`]'s scalar keys.
///
/// Grades are stored unclamped (the formula is unbounded before clamping)
/// so milestone target math round-trips exactly. Clamping to the 20-80
/// display range is the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeVector {
    /// Grade for mean exit velocity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_ev: Option<i32>,
    /// Grade for peak exit velocity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ev: Option<i32>,
    /// Grade for mean bat speed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_bs: Option<i32>,
    /// Grade for peak bat speed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bs: Option<i32>,
    /// Grade for hard-hit rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barrel_pct: Option<i32>,
    /// Grade for mean launch angle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_la: Option<i32>,
    /// Grade for top-5% launch angle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_angle_top5: Option<i32>,
}

impl GradeVector {
    /// Raw grade for a metric, `None` when the metric or its benchmark was absent
    #[must_use]
    pub fn grade(&self, metric: Metric) -> Option<i32> {
        match metric {
            Metric::AvgExitVelocity => self.avg_ev,
            Metric::MaxExitVelocity => self.max_ev,
            Metric::AvgBatSpeed => self.avg_bs,
            Metric::MaxBatSpeed => self.max_bs,
            Metric::BarrelPct => self.barrel_pct,
            Metric::AvgLaunchAngle => self.avg_la,
            Metric::LaunchAngleTop5 => self.launch_angle_top5,
        }
    }

    /// Set the grade for a metric
    pub fn set(&mut self, metric: Metric, grade: Option<i32>) {
        match metric {
            Metric::AvgExitVelocity => self.avg_ev = grade,
            Metric::MaxExitVelocity => self.max_ev = grade,
            Metric::AvgBatSpeed => self.avg_bs = grade,
            Metric::MaxBatSpeed => self.max_bs = grade,
            Metric::BarrelPct => self.barrel_pct = grade,
            Metric::AvgLaunchAngle => self.avg_la = grade,
            Metric::LaunchAngleTop5 => self.launch_angle_top5 = grade,
        }
    }

    /// Whether no metric carries a grade
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Metric::ALL.iter().all(|m| self.grade(*m).is_none())
    }
}

/// One session's summary: counts, metric vector, and grade vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Session identifier assigned by the storage layer
    pub session_id: Uuid,
    /// Calendar date of the session; comparisons are date-only
    pub session_date: NaiveDate,
    /// Sensor that produced the session
    pub session_type: SessionSource,
    /// Count of all swings in the session, regardless of field completeness
    pub total_swings: u32,
    /// Summary metrics reduced from the raw swings
    pub metrics: MetricVector,
    /// Raw scouting grades for the summary metrics
    pub grades: GradeVector,
}

impl SessionSummary {
    /// Convenience accessor for a scalar metric value
    #[must_use]
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.metrics.value(metric)
    }
}
