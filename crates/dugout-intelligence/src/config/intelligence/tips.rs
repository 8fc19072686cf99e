// ABOUTME: Coaching-tip configuration: grade bounds and two-tier message copy
// ABOUTME: Tip wording is configuration data so it can be localized or re-branded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Coaching Tips Configuration
//!
//! Each tippable metric carries two message tiers: a foundation message for
//! grades below the cutoff and a refinement message for grades between the
//! cutoff and the tip ceiling. Selecting a tier is a data lookup, not a
//! code change.

use serde::{Deserialize, Serialize};

use crate::swing_constants::coaching::{
    FOUNDATION_GRADE_CUTOFF, TIP_GRADE_CEILING, TIP_GRADE_STEP,
};

/// Configuration for the coaching-tip generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingTipsConfig {
    /// Grades at or above this never receive a tip
    pub tip_grade_ceiling: i32,
    /// Grade points a tip asks the player to climb
    pub tip_grade_step: i32,
    /// Below this grade the foundation-tier message is selected
    pub foundation_grade_cutoff: i32,
    /// Two-tier tip copy per tippable metric
    pub messages: TipMessageSet,
}

/// Two-tier message copy for one metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipMessages {
    /// Message for grades below the foundation cutoff
    pub foundation: String,
    /// Message for grades between the cutoff and the tip ceiling
    pub refinement: String,
}

/// Tip copy for every metric on the coaching allowlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipMessageSet {
    /// Average exit velocity copy
    pub avg_ev: TipMessages,
    /// Max exit velocity copy
    pub max_ev: TipMessages,
    /// Average bat speed copy
    pub avg_bs: TipMessages,
    /// Barrel rate copy
    pub barrel_pct: TipMessages,
}

impl Default for CoachingTipsConfig {
    fn default() -> Self {
        Self {
            tip_grade_ceiling: TIP_GRADE_CEILING,
            tip_grade_step: TIP_GRADE_STEP,
            foundation_grade_cutoff: FOUNDATION_GRADE_CUTOFF,
            messages: TipMessageSet::default(),
        }
    }
}

impl Default for TipMessageSet {
    fn default() -> Self {
        Self {
            avg_ev: TipMessages {
                foundation:
                    "Build a repeatable hard-contact base: full-intent tee rounds, tracking contact quality every swing"
                        .into(),
                refinement:
                    "Mix front-toss power rounds into cage work to pull your average exit velocity up a few ticks"
                        .into(),
            },
            max_ev: TipMessages {
                foundation:
                    "Develop rotational power away from the cage: med-ball throws and hip-shoulder separation work"
                        .into(),
                refinement:
                    "Chase peak exit velocity in short max-intent rounds - quality over volume"
                        .into(),
            },
            avg_bs: TipMessages {
                foundation:
                    "Groove the swing path first: underload bat speed work two or three times a week"
                        .into(),
                refinement:
                    "Add overload/underload bat training to push your bat speed ceiling".into(),
            },
            barrel_pct: TipMessages {
                foundation:
                    "Prioritize squaring the ball up: soft-toss rounds focused on barrel contact before chasing power"
                        .into(),
                refinement:
                    "Hunt pitches you can drive and keep barrel rate climbing with game-speed cage rounds"
                        .into(),
            },
        }
    }
}
