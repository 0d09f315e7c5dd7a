// ABOUTME: Streak detection configuration
// ABOUTME: Controls whether rest days are tolerated and how many in a row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::constants::streak;
use serde::{Deserialize, Serialize};

/// Default streak policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakConfig {
    /// Whether missed days up to the limit keep a streak alive
    pub allow_rest_days: bool,
    /// Consecutive missed days tolerated when rest days are allowed
    pub max_rest_days_per_week: u32,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            allow_rest_days: false,
            max_rest_days_per_week: streak::DEFAULT_MAX_REST_DAYS_PER_WEEK,
        }
    }
}
