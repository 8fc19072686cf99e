// ABOUTME: Raw per-swing sensor measurements from HitTrax and Blast sensors
// ABOUTME: SwingRecord with optional readings plus the 13-cell StrikeZone label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Per-swing sensor records.
//!
//! Any reading may be absent: HitTrax sessions carry ball-flight data but no
//! bat-path data, Blast sessions the reverse, and individual swings drop
//! readings on mishits. Absent values stay `None` and are excluded from
//! aggregates; they are never coerced to zero.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// One cell of the 13-zone strike-zone layout.
///
/// Zones 1-9 form the in-zone 3×3 grid (top row 1-2-3 across, increasing
/// downward to 7-8-9); zones 10-13 are the four chase corners outside the
/// zone (10/11 above, 12/13 below). The engine preserves zone identity only;
/// the 5-row grid render belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StrikeZone(u8);

impl StrikeZone {
    /// Number of cells in the full layout
    pub const ZONE_COUNT: u8 = 13;
    /// First zone label outside the strike zone proper
    pub const FIRST_CHASE_ZONE: u8 = 10;

    /// Build a zone from its 1-based label.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidZone`] for labels outside `1..=13`.
    pub const fn new(label: u8) -> Result<Self, AppError> {
        if label >= 1 && label <= Self::ZONE_COUNT {
            Ok(Self(label))
        } else {
            Err(AppError::InvalidZone(label))
        }
    }

    /// The 1-based zone label
    #[must_use]
    pub const fn label(self) -> u8 {
        self.0
    }

    /// Whether this cell lies outside the strike zone proper
    #[must_use]
    pub const fn is_chase(self) -> bool {
        self.0 >= Self::FIRST_CHASE_ZONE
    }
}

impl TryFrom<u8> for StrikeZone {
    type Error = AppError;

    fn try_from(label: u8) -> Result<Self, Self::Error> {
        Self::new(label)
    }
}

impl From<StrikeZone> for u8 {
    fn from(zone: StrikeZone) -> Self {
        zone.0
    }
}

impl fmt::Display for StrikeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single raw swing as parsed from a sensor export.
///
/// Produced by the ingestion layer (out of scope here) and consumed
/// read-only by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingRecord {
    /// Session this swing belongs to
    pub session_id: Uuid,
    /// Ball exit velocity (mph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_velocity: Option<f64>,
    /// Ball launch angle (degrees)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_angle: Option<f64>,
    /// Projected carry distance (feet)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Bat speed at impact (mph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bat_speed: Option<f64>,
    /// Time from first movement to contact (seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_contact: Option<f64>,
    /// Strike-zone cell of the pitch, when the sensor reports location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_zone: Option<StrikeZone>,
}

impl SwingRecord {
    /// An empty swing record for a session, with every reading absent
    #[must_use]
    pub const fn empty(session_id: Uuid) -> Self {
        Self {
            session_id,
            exit_velocity: None,
            launch_angle: None,
            distance: None,
            bat_speed: None,
            time_to_contact: None,
            strike_zone: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_labels_validate_range() {
        assert!(StrikeZone::new(1).is_ok());
        assert!(StrikeZone::new(13).is_ok());
        assert_eq!(StrikeZone::new(0), Err(AppError::InvalidZone(0)));
        assert_eq!(StrikeZone::new(14), Err(AppError::InvalidZone(14)));
    }

    #[test]
    fn chase_zones_start_at_ten() {
        assert!(!StrikeZone::new(9).unwrap().is_chase());
        assert!(StrikeZone::new(10).unwrap().is_chase());
        assert!(StrikeZone::new(13).unwrap().is_chase());
    }

    #[test]
    fn zone_serializes_as_bare_number() {
        let zone = StrikeZone::new(5).unwrap();
        assert_eq!(serde_json::to_string(&zone).unwrap(), "5");
        let back: StrikeZone = serde_json::from_str("5").unwrap();
        assert_eq!(back, zone);
        assert!(serde_json::from_str::<StrikeZone>("14").is_err());
    }

    #[test]
    fn swing_uses_camel_case_wire_names() {
        let mut swing = SwingRecord::empty(Uuid::nil());
        swing.exit_velocity = Some(98.5);
        swing.strike_zone = Some(StrikeZone::new(5).unwrap());
        let json = serde_json::to_value(&swing).unwrap();
        assert_eq!(json["exitVelocity"], 98.5);
        assert_eq!(json["strikeZone"], 5);
        assert!(json.get("batSpeed").is_none());
    }
}
