// ABOUTME: Rule-based coaching-tip selection from the latest grade vector
// ABOUTME: Fixed metric allowlist, sub-60 gate, two-tier message lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Coaching tips.
//!
//! A tip is emitted only for metrics on the fixed allowlist whose current
//! grade sits below the tip ceiling; the suggested target climbs one step
//! but never past the ceiling. Message copy is two-tier configuration data
//! (foundation below 40, refinement otherwise), so wording changes and
//! localization never touch this module.

use serde::{Deserialize, Serialize};

use crate::config::intelligence::{CoachingTipsConfig, TipMessages};
use crate::config::IntelligenceConfig;
use crate::models::{GradeVector, Metric};

/// Metrics eligible for coaching tips, in emission order
pub const TIP_METRICS: [Metric; 4] = [
    Metric::AvgExitVelocity,
    Metric::MaxExitVelocity,
    Metric::AvgBatSpeed,
    Metric::BarrelPct,
];

/// An improvement tip for one metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingTip {
    /// Metric the tip targets
    pub metric: Metric,
    /// Player's current raw grade for the metric
    pub current_grade: i32,
    /// Grade the tip aims for (one step up, capped at the ceiling)
    pub target_grade: i32,
    /// Natural-language improvement tip
    pub tip: String,
}

/// Selects coaching tips from a player's latest grade vector
#[derive(Debug, Clone)]
pub struct CoachingTipGenerator {
    config: CoachingTipsConfig,
}

impl Default for CoachingTipGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachingTipGenerator {
    /// Create a generator from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().coaching_tips.clone(),
        }
    }

    /// Create a generator with custom configuration
    #[must_use]
    pub const fn with_config(config: CoachingTipsConfig) -> Self {
        Self { config }
    }

    /// Tips for every allowlisted metric graded below the ceiling.
    ///
    /// Metrics without a grade are insufficient data and emit nothing;
    /// an ungraded metric is never treated as a zero grade.
    #[must_use]
    pub fn tips(&self, grades: &GradeVector) -> Vec<CoachingTip> {
        TIP_METRICS
            .iter()
            .filter_map(|&metric| {
                let current_grade = grades.grade(metric)?;
                if current_grade >= self.config.tip_grade_ceiling {
                    return None;
                }
                let target_grade = (current_grade + self.config.tip_grade_step)
                    .min(self.config.tip_grade_ceiling);
                Some(CoachingTip {
                    metric,
                    current_grade,
                    target_grade,
                    tip: self.message_for(metric, current_grade),
                })
            })
            .collect()
    }

    /// Pick the message tier for a metric and grade
    fn message_for(&self, metric: Metric, current_grade: i32) -> String {
        let messages = self.messages_for(metric);
        if current_grade < self.config.foundation_grade_cutoff {
            messages.foundation.clone()
        } else {
            messages.refinement.clone()
        }
    }

    /// Message pair for an allowlisted metric
    fn messages_for(&self, metric: Metric) -> &TipMessages {
        match metric {
            Metric::MaxExitVelocity => &self.config.messages.max_ev,
            Metric::AvgBatSpeed => &self.config.messages.avg_bs,
            Metric::BarrelPct => &self.config.messages.barrel_pct,
            // allowlist is fixed; anything else falls back to the broadest copy
            _ => &self.config.messages.avg_ev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> CoachingTipGenerator {
        CoachingTipGenerator::with_config(CoachingTipsConfig::default())
    }

    fn grades(avg_ev: Option<i32>) -> GradeVector {
        GradeVector {
            avg_ev,
            ..GradeVector::default()
        }
    }

    #[test]
    fn sub_ceiling_grade_gets_a_refinement_tip() {
        let tips = generator().tips(&grades(Some(55)));
        assert_eq!(tips.len(), 1);
        let tip = &tips[0];
        assert_eq!(tip.metric, Metric::AvgExitVelocity);
        assert_eq!(tip.current_grade, 55);
        // 55 + 10 caps at the 60 ceiling
        assert_eq!(tip.target_grade, 60);
        assert_eq!(
            tip.tip,
            CoachingTipsConfig::default().messages.avg_ev.refinement
        );
    }

    #[test]
    fn low_grade_gets_the_foundation_tier() {
        let tips = generator().tips(&grades(Some(35)));
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].target_grade, 45);
        assert_eq!(
            tips[0].tip,
            CoachingTipsConfig::default().messages.avg_ev.foundation
        );
    }

    #[test]
    fn boundary_grades_pick_the_expected_tier() {
        // exactly 40 is refinement, not foundation
        let tips = generator().tips(&grades(Some(40)));
        assert_eq!(
            tips[0].tip,
            CoachingTipsConfig::default().messages.avg_ev.refinement
        );
        // exactly 60 is no tip at all
        assert!(generator().tips(&grades(Some(60))).is_empty());
    }

    #[test]
    fn ungraded_metrics_emit_nothing() {
        assert!(generator().tips(&grades(None)).is_empty());
    }

    #[test]
    fn non_allowlisted_metrics_never_tip() {
        let vector = GradeVector {
            // low grades on metrics outside the allowlist
            avg_la: Some(30),
            launch_angle_top5: Some(25),
            max_bs: Some(30),
            ..GradeVector::default()
        };
        assert!(generator().tips(&vector).is_empty());
    }

    #[test]
    fn each_allowlisted_metric_tips_independently() {
        let vector = GradeVector {
            avg_ev: Some(35),
            max_ev: Some(55),
            avg_bs: Some(70),
            barrel_pct: Some(45),
            ..GradeVector::default()
        };
        let tips = generator().tips(&vector);
        // avg_bs is at/above the ceiling, the other three tip
        assert_eq!(tips.len(), 3);
        assert_eq!(tips[0].metric, Metric::AvgExitVelocity);
        assert_eq!(tips[1].metric, Metric::MaxExitVelocity);
        assert_eq!(tips[2].metric, Metric::BarrelPct);
        assert_eq!(tips[2].target_grade, 55);
    }
}
