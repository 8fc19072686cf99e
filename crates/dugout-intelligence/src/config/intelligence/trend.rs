// ABOUTME: Trend analyzer configuration: direction thresholds and windows
// ABOUTME: Strong-trend percentage, recent-form window, minimum data points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Trend Analyzer Configuration

use serde::{Deserialize, Serialize};

use crate::swing_constants::trend::{
    MIN_TREND_SESSIONS, RECENT_FORM_WINDOW, STRONG_TREND_THRESHOLD_PCT,
};

/// Configuration for longitudinal trend analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Percent change beyond which a trend is classified strong
    pub strong_trend_threshold_pct: f64,
    /// Number of most-recent value-bearing sessions in the recent-form average
    pub recent_form_window: usize,
    /// Minimum value-bearing sessions before a trend is reported
    pub min_sessions_with_data: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            strong_trend_threshold_pct: STRONG_TREND_THRESHOLD_PCT,
            recent_form_window: RECENT_FORM_WINDOW,
            min_sessions_with_data: MIN_TREND_SESSIONS,
        }
    }
}
