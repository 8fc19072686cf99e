// ABOUTME: Intelligence configuration container with global singleton access
// ABOUTME: Defaults from swing_constants, env overrides, JSON loader, validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

//! Intelligence engine configuration.
//!
//! One sub-config per engine component, with defaults sourced from
//! [`crate::swing_constants`]. The global instance loads once per process,
//! applying `DUGOUT_*` environment overrides and falling back to defaults
//! (with a warning) if the result fails validation.

use std::env;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Configuration error types
pub mod error;
/// Grading scale parameters
pub mod grading;
/// Session metric normalization parameters
pub mod metrics;
/// Coaching-tip bounds and message copy
pub mod tips;
/// Trend classification parameters
pub mod trend;

pub use error::ConfigError;
pub use grading::GradingConfig;
pub use metrics::MetricsConfig;
pub use tips::{CoachingTipsConfig, TipMessageSet, TipMessages};
pub use trend::TrendConfig;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelligenceConfig {
    /// Session metric normalization settings
    pub metrics: MetricsConfig,
    /// Grading scale settings
    pub grading: GradingConfig,
    /// Trend analyzer settings
    pub trend_analyzer: TrendConfig,
    /// Coaching-tip settings
    pub coaching_tips: CoachingTipsConfig,
}

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides on top of defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable
    /// value or the resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a JSON document (partial documents are
    /// filled from defaults).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the parsed
    /// configuration fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `DUGOUT_*` environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(value) = parse_env::<f64>("DUGOUT_BARREL_EV_THRESHOLD_MPH")? {
            self.metrics.barrel_ev_threshold_mph = value;
        }
        if let Some(value) = parse_env::<f64>("DUGOUT_STRONG_TREND_THRESHOLD_PCT")? {
            self.trend_analyzer.strong_trend_threshold_pct = value;
        }
        if let Some(value) = parse_env::<usize>("DUGOUT_RECENT_FORM_WINDOW")? {
            self.trend_analyzer.recent_form_window = value;
        }
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRange`] for any parameter outside its
    /// acceptable range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metrics.barrel_ev_threshold_mph <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "barrel_ev_threshold_mph must be positive",
            ));
        }
        if self.metrics.top_exit_velocity_fraction <= 0.0
            || self.metrics.top_exit_velocity_fraction > 1.0
        {
            return Err(ConfigError::InvalidRange(
                "top_exit_velocity_fraction must be in (0, 1]",
            ));
        }
        if self.grading.points_per_sd <= 0.0 {
            return Err(ConfigError::InvalidRange("points_per_sd must be positive"));
        }
        if self.grading.display_grade_floor >= self.grading.display_grade_ceiling {
            return Err(ConfigError::InvalidRange(
                "display_grade_floor must be < display_grade_ceiling",
            ));
        }
        if self.trend_analyzer.strong_trend_threshold_pct <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "strong_trend_threshold_pct must be positive",
            ));
        }
        if self.trend_analyzer.recent_form_window == 0 {
            return Err(ConfigError::InvalidRange(
                "recent_form_window must be at least 1",
            ));
        }
        if self.trend_analyzer.min_sessions_with_data < 2 {
            return Err(ConfigError::InvalidRange(
                "min_sessions_with_data must be at least 2",
            ));
        }
        if self.coaching_tips.tip_grade_step <= 0 {
            return Err(ConfigError::InvalidRange("tip_grade_step must be positive"));
        }
        if self.coaching_tips.foundation_grade_cutoff >= self.coaching_tips.tip_grade_ceiling {
            return Err(ConfigError::InvalidRange(
                "foundation_grade_cutoff must be < tip_grade_ceiling",
            ));
        }
        Ok(())
    }
}

/// Read and parse an optional environment variable
fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{name}: {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = IntelligenceConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.metrics.barrel_ev_threshold_mph - 95.0).abs() < f64::EPSILON);
        assert_eq!(config.trend_analyzer.recent_form_window, 4);
    }

    #[test]
    fn partial_json_is_filled_from_defaults() {
        let config =
            IntelligenceConfig::from_json(r#"{"metrics":{"barrel_ev_threshold_mph":92.0,"top_exit_velocity_fraction":0.05}}"#)
                .unwrap();
        assert!((config.metrics.barrel_ev_threshold_mph - 92.0).abs() < f64::EPSILON);
        assert!((config.grading.points_per_sd - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut config = IntelligenceConfig::default();
        config.metrics.top_exit_velocity_fraction = 1.5;
        assert!(config.validate().is_err());

        let mut config = IntelligenceConfig::default();
        config.trend_analyzer.min_sessions_with_data = 1;
        assert!(config.validate().is_err());

        let mut config = IntelligenceConfig::default();
        config.coaching_tips.foundation_grade_cutoff = 70;
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            IntelligenceConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
