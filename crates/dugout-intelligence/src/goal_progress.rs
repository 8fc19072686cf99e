// ABOUTME: Goal progress tracking against the latest session summary
// ABOUTME: Progress percentage plus raw days-left; status stays external
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Goal progress.
//!
//! Compares a coach-defined goal against the player's latest session and
//! produces a 0-100 progress percentage plus a raw days-left figure. The
//! tracker never flips `Goal::status`; a negative `days_left` is reported
//! as-is and the external goal workflow decides "missed" semantics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::models::{Goal, GoalStatus, SessionSummary};

/// Derived progress for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Goal the progress describes
    pub goal_id: Uuid,
    /// Latest session's value for the goal's metric, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    /// Progress toward the target, capped at 100
    pub progress: f64,
    /// Whole days until the goal window closes; negative when overdue
    pub days_left: i64,
}

/// Compares goals against the latest session summary
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalProgressTracker;

impl GoalProgressTracker {
    /// Create a tracker
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Progress for a goal given the player's latest session (if any).
    ///
    /// `today` is injected by the caller to keep the computation pure.
    #[must_use]
    pub fn track(
        &self,
        goal: &Goal,
        latest: Option<&SessionSummary>,
        today: NaiveDate,
    ) -> GoalProgress {
        let days_left = (goal.end_date - today).num_days();
        let current_value = latest.and_then(|s| s.metric(goal.goal_type));

        let progress = if goal.status == GoalStatus::Achieved {
            100.0
        } else {
            match current_value {
                Some(value) if goal.target_value > 0.0 => {
                    (value / goal.target_value * 100.0).min(100.0)
                }
                Some(_) => {
                    debug!(goal_id = %goal.id, "non-positive goal target, reporting zero progress");
                    0.0
                }
                None => 0.0,
            }
        };

        GoalProgress {
            goal_id: goal.id,
            current_value,
            progress,
            days_left,
        }
    }
}
