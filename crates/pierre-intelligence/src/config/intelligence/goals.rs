// ABOUTME: Goal progress configuration for status classification
// ABOUTME: Configures the at-risk window and the on-track tolerance band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Progress Configuration

use pierre_core::constants::goals;
use serde::{Deserialize, Serialize};

/// Thresholds used to classify goal status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgressConfig {
    /// Days remaining below which a goal can be flagged at risk
    pub at_risk_days: i64,
    /// Progress below which a near-deadline goal is at risk
    pub at_risk_progress_percent: f64,
    /// Half-width of the on-track band around expected progress
    pub status_band_percent: f64,
}

impl Default for GoalProgressConfig {
    fn default() -> Self {
        Self {
            at_risk_days: goals::AT_RISK_DAYS,
            at_risk_progress_percent: goals::AT_RISK_PROGRESS_PERCENT,
            status_band_percent: goals::STATUS_BAND_PERCENT,
        }
    }
}
