// ABOUTME: Metrics configuration for session summary calculation
// ABOUTME: Barrel threshold and the top-exit-velocity subset fraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Metrics Configuration
//!
//! Provides configuration for per-session metric normalization: the fixed
//! hard-hit exit-velocity threshold and the size of the best-contact subset.

use serde::{Deserialize, Serialize};

use crate::swing_constants::exit_velocity::{BARREL_EV_THRESHOLD_MPH, TOP_EXIT_VELOCITY_FRACTION};

/// Configuration for session metric normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Exit velocity at or above which a swing counts toward barrel rate (mph).
    /// One-dimensional by contract; launch angle is ignored.
    pub barrel_ev_threshold_mph: f64,
    /// Fraction of exit-velocity-bearing swings forming the top-EV subset
    pub top_exit_velocity_fraction: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            barrel_ev_threshold_mph: BARREL_EV_THRESHOLD_MPH,
            top_exit_velocity_fraction: TOP_EXIT_VELOCITY_FRACTION,
        }
    }
}
