// ABOUTME: Coach-defined player goals over summary metrics
// ABOUTME: Goal lifecycle status belongs to the coaching workflow, not the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Coaching goals.
//!
//! A goal targets one summary metric over a date window. The engine reads
//! `goal_type` and `target_value` to derive a progress percentage; it never
//! flips `status`; achieved/missed transitions are owned by the external
//! goal-management workflow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::session::Metric;

/// Lifecycle state of a goal, managed outside the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Goal window is open and untargeted
    Active,
    /// The coach (or workflow) marked the goal reached
    Achieved,
    /// The window closed without the target being reached
    Missed,
}

/// A coach-defined target for one player and one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Goal identifier
    pub id: Uuid,
    /// Player the goal belongs to
    pub player_id: Uuid,
    /// Metric the goal targets
    pub goal_type: Metric,
    /// Target value in the metric's own unit
    pub target_value: f64,
    /// First day of the goal window
    pub start_date: NaiveDate,
    /// Last day of the goal window
    pub end_date: NaiveDate,
    /// Lifecycle state, owned by the coaching workflow
    pub status: GoalStatus,
    /// Day the goal was reached, when the workflow recorded one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achieved_date: Option<NaiveDate>,
    /// Whether the achievement milestone was already awarded
    pub milestone_awarded: bool,
}

impl Goal {
    /// A new active goal with a generated id
    #[must_use]
    pub fn new(
        player_id: Uuid,
        goal_type: Metric,
        target_value: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_id,
            goal_type,
            target_value,
            start_date,
            end_date,
            status: GoalStatus::Active,
            achieved_date: None,
            milestone_awarded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_goals_start_active_and_unawarded() {
        let start = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let goal = Goal::new(Uuid::new_v4(), Metric::AvgExitVelocity, 95.0, start, end);
        assert_eq!(goal.status, GoalStatus::Active);
        assert_eq!(goal.achieved_date, None);
        assert!(!goal.milestone_awarded);
    }

    #[test]
    fn status_uses_snake_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&GoalStatus::Achieved).unwrap(),
            "\"achieved\""
        );
        let back: GoalStatus = serde_json::from_str("\"missed\"").unwrap();
        assert_eq!(back, GoalStatus::Missed);
    }
}
