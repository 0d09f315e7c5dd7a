// ABOUTME: Intelligence module configuration for strength analytics
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `strength` - 1RM reliability ceiling, trend sample size and thresholds, cache size
//! - `goals` - goal status classification thresholds
//! - `streak` - rest-day tolerance
//! - `distribution` - balance tolerance and progressive overload thresholds
//!
//! Defaults reproduce the fixed policy constants in `pierre_core::constants`.
//! Environment variables prefixed with `PIERRE_` override individual values.

pub mod distribution;
pub mod error;
pub mod goals;
pub mod streak;
pub mod strength;

pub use distribution::{DistributionConfig, OverloadConfig};
pub use error::ConfigError;
pub use goals::GoalProgressConfig;
pub use streak::StreakConfig;
pub use strength::StrengthConfig;

use pierre_core::constants::cache::MAX_ONE_REP_MAX_CACHE_ENTRIES;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Strength metrics and trend detection
    pub strength: StrengthConfig,
    /// Goal status classification
    pub goals: GoalProgressConfig,
    /// Streak detection defaults
    pub streak: StreakConfig,
    /// Volume balance scoring
    pub distribution: DistributionConfig,
    /// Progressive overload classification
    pub overload: OverloadConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let strength = &self.strength;
        if strength.max_reliable_reps == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_reliable_reps must be at least 1",
            ));
        }
        if strength.min_trend_samples < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_trend_samples must be at least 2 for a regression",
            ));
        }
        if !strength.trend_threshold_percent.is_finite() || strength.trend_threshold_percent < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "trend_threshold_percent must be a non-negative number",
            ));
        }
        if strength.one_rep_max_cache_capacity == 0
            || strength.one_rep_max_cache_capacity > MAX_ONE_REP_MAX_CACHE_ENTRIES
        {
            return Err(ConfigError::ValueOutOfRange(
                "one_rep_max_cache_capacity must be between 1 and 100000",
            ));
        }

        let goals = &self.goals;
        if goals.at_risk_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "at_risk_days must not be negative",
            ));
        }
        if !(0.0..=100.0).contains(&goals.at_risk_progress_percent) {
            return Err(ConfigError::InvalidRange(
                "at_risk_progress_percent must be between 0 and 100",
            ));
        }
        if !(0.0..=100.0).contains(&goals.status_band_percent) {
            return Err(ConfigError::InvalidRange(
                "status_band_percent must be between 0 and 100",
            ));
        }

        if !(0.0..=100.0).contains(&self.distribution.balance_tolerance_percent) {
            return Err(ConfigError::InvalidRange(
                "balance_tolerance_percent must be between 0 and 100",
            ));
        }

        let overload = &self.overload;
        if overload.progression_threshold_percent < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "progression_threshold_percent must not be negative",
            ));
        }
        if overload.volume_spike_threshold_percent <= overload.progression_threshold_percent {
            return Err(ConfigError::InvalidRange(
                "volume_spike_threshold_percent must be > progression_threshold_percent",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Strength
        Self::apply_env_var(
            "PIERRE_STRENGTH_MAX_RELIABLE_REPS",
            &mut self.strength.max_reliable_reps,
        )?;
        Self::apply_env_var(
            "PIERRE_TREND_MIN_SAMPLES",
            &mut self.strength.min_trend_samples,
        )?;
        Self::apply_env_var(
            "PIERRE_TREND_THRESHOLD_PERCENT",
            &mut self.strength.trend_threshold_percent,
        )?;
        Self::apply_env_var(
            "PIERRE_ONE_RM_CACHE_CAPACITY",
            &mut self.strength.one_rep_max_cache_capacity,
        )?;

        // Goals
        Self::apply_env_var("PIERRE_GOAL_AT_RISK_DAYS", &mut self.goals.at_risk_days)?;
        Self::apply_env_var(
            "PIERRE_GOAL_AT_RISK_PROGRESS",
            &mut self.goals.at_risk_progress_percent,
        )?;
        Self::apply_env_var(
            "PIERRE_GOAL_STATUS_BAND",
            &mut self.goals.status_band_percent,
        )?;

        // Streaks
        Self::apply_env_var(
            "PIERRE_STREAK_ALLOW_REST_DAYS",
            &mut self.streak.allow_rest_days,
        )?;
        Self::apply_env_var(
            "PIERRE_STREAK_MAX_REST_DAYS",
            &mut self.streak.max_rest_days_per_week,
        )?;

        // Distribution and overload
        Self::apply_env_var(
            "PIERRE_BALANCE_TOLERANCE",
            &mut self.distribution.balance_tolerance_percent,
        )?;
        Self::apply_env_var(
            "PIERRE_OVERLOAD_THRESHOLD",
            &mut self.overload.progression_threshold_percent,
        )?;
        Self::apply_env_var(
            "PIERRE_VOLUME_SPIKE_THRESHOLD",
            &mut self.overload.volume_spike_threshold_percent,
        )?;

        Ok(self)
    }
}
