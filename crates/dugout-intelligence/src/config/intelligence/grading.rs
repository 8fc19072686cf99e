// ABOUTME: Grading configuration for the 20-80 scouting scale
// ABOUTME: Scale midpoint, points per standard deviation, display clamp bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Grading Configuration
//!
//! Parameters of the benchmark-normalized scouting scale. Raw grades are
//! unbounded; the display bounds only apply when a caller asks for a
//! clamped presentation grade.

use serde::{Deserialize, Serialize};

use crate::swing_constants::scouting_scale::{
    DISPLAY_GRADE_CEILING, DISPLAY_GRADE_FLOOR, POINTS_PER_SD, SCALE_MIDPOINT,
};

/// Configuration for the grade calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Grade assigned to the cohort mean
    pub scale_midpoint: f64,
    /// Grade points per cohort standard deviation
    pub points_per_sd: f64,
    /// Lower bound of the bounded display range
    pub display_grade_floor: i32,
    /// Upper bound of the bounded display range
    pub display_grade_ceiling: i32,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            scale_midpoint: SCALE_MIDPOINT,
            points_per_sd: POINTS_PER_SD,
            display_grade_floor: DISPLAY_GRADE_FLOOR,
            display_grade_ceiling: DISPLAY_GRADE_CEILING,
        }
    }
}
