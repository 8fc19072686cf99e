// ABOUTME: Domain constants for swing grading and trend analysis
// ABOUTME: Exit-velocity thresholds, scouting-scale parameters, zone layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Swing-analytics constants used throughout the intelligence engine.
//!
//! Values follow the conventions of public baseball analytics (Statcast
//! hard-hit reporting, the traditional 20-80 scouting scale). Where the
//! platform deliberately simplifies a public definition, the simplification
//! is documented on the constant and must not be "corrected" silently;
//! downstream grading depends on the exact values.

/// Exit-velocity thresholds for contact quality
pub mod exit_velocity {
    /// Exit velocity at or above which a swing counts toward barrel rate (mph).
    ///
    /// This is the Statcast *hard-hit* threshold applied one-dimensionally:
    /// launch angle is intentionally ignored, unlike the two-dimensional
    /// Statcast barrel definition. Grading benchmarks assume this exact
    /// simplification.
    /// Reference: MLB Statcast glossary, "Hard-hit rate"
    pub const BARREL_EV_THRESHOLD_MPH: f64 = 95.0;

    /// Fraction of a session's exit-velocity-bearing swings that form the
    /// "best contact" subset for the top-5% launch-angle metric
    pub const TOP_EXIT_VELOCITY_FRACTION: f64 = 0.05;
}

/// Parameters of the 20-80 scouting scale
///
/// Reference: the traditional major-league scouting scale, where 50 is the
/// cohort average and each 10-point step equals one standard deviation.
pub mod scouting_scale {
    /// Grade assigned to the cohort mean
    pub const SCALE_MIDPOINT: f64 = 50.0;

    /// Grade points per cohort standard deviation
    pub const POINTS_PER_SD: f64 = 10.0;

    /// Lower bound of the bounded display range
    pub const DISPLAY_GRADE_FLOOR: i32 = 20;

    /// Upper bound of the bounded display range
    pub const DISPLAY_GRADE_CEILING: i32 = 80;

    /// Milestone thresholds with their scouting labels, ascending.
    /// First crossing of each threshold per metric is recorded once.
    pub const GRADE_MILESTONES: [(i32, &str); 5] = [
        (40, "Below Average"),
        (50, "Average"),
        (60, "Above Average"),
        (70, "Well Above Average"),
        (80, "Elite"),
    ];
}

/// Trend classification thresholds
pub mod trend {
    /// Percent change beyond which a trend is classified strong (either way)
    pub const STRONG_TREND_THRESHOLD_PCT: f64 = 5.0;

    /// Number of most-recent value-bearing sessions in the recent-form average
    pub const RECENT_FORM_WINDOW: usize = 4;

    /// Minimum value-bearing sessions before a trend is reported at all
    pub const MIN_TREND_SESSIONS: usize = 2;
}

/// Strike-zone layout shared with the presentation layer
pub mod strike_zone {
    /// Cells inside the strike zone proper (3×3 grid, zones 1-9)
    pub const IN_ZONE_COUNT: u8 = 9;

    /// Chase cells outside the zone (zones 10-13: 10/11 above, 12/13 below)
    pub const CHASE_ZONE_COUNT: u8 = 4;

    /// Total cells in the layout
    pub const ZONE_COUNT: u8 = 13;
}

/// Coaching-tip selection bounds
pub mod coaching {
    /// Grades at or above this never receive a tip, and tips target at most it
    pub const TIP_GRADE_CEILING: i32 = 60;

    /// Grade points a tip asks the player to climb
    pub const TIP_GRADE_STEP: i32 = 10;

    /// Below this grade the foundation-tier message is selected
    pub const FOUNDATION_GRADE_CUTOFF: i32 = 40;
}
