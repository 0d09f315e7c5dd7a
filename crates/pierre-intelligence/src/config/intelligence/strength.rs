// ABOUTME: Strength metrics configuration for one-rep-max estimation and trend detection
// ABOUTME: Configures the reliable rep ceiling, trend sample size, thresholds, and cache size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength Metrics Configuration

use pierre_core::constants::{cache, strength};
use serde::{Deserialize, Serialize};

/// Configuration for estimated 1RM and trend classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthConfig {
    /// Rep counts above this return no 1RM estimate
    pub max_reliable_reps: u32,
    /// Minimum history entries (and valid points) for a trend
    pub min_trend_samples: usize,
    /// Percentage change per step separating up/down from flat
    pub trend_threshold_percent: f64,
    /// Capacity of the optional `(weight, reps)` 1RM cache
    pub one_rep_max_cache_capacity: usize,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            max_reliable_reps: strength::MAX_RELIABLE_REPS,
            min_trend_samples: strength::MIN_TREND_SAMPLES,
            trend_threshold_percent: strength::TREND_THRESHOLD_PERCENT,
            one_rep_max_cache_capacity: cache::DEFAULT_ONE_REP_MAX_CACHE_ENTRIES,
        }
    }
}
