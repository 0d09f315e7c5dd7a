// ABOUTME: Volume distribution and progressive overload configuration
// ABOUTME: Configures balance tolerance and period-over-period volume thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Distribution Configuration
//!
//! Thresholds for muscle-group balance scoring and week-over-week volume
//! progression classification.

use pierre_core::constants::distribution;
use serde::{Deserialize, Serialize};

/// Balance scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Percentage points a category may deviate and still be balanced
    pub balance_tolerance_percent: f64,
}

/// Progressive overload classification thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverloadConfig {
    /// Change (percent) beyond which volume is progressing or regressing
    pub progression_threshold_percent: f64,
    /// Increase (percent) flagged as an excessive spike
    pub volume_spike_threshold_percent: f64,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            balance_tolerance_percent: distribution::BALANCE_TOLERANCE_PERCENT,
        }
    }
}

impl Default for OverloadConfig {
    fn default() -> Self {
        Self {
            progression_threshold_percent: distribution::PROGRESSION_THRESHOLD_PERCENT,
            volume_spike_threshold_percent: distribution::VOLUME_SPIKE_THRESHOLD_PERCENT,
        }
    }
}
