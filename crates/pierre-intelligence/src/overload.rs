// ABOUTME: Progressive overload classification over consecutive period volume buckets
// ABOUTME: Labels each period as baseline, progressing, maintaining, regressing, or excessive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::{IntelligenceConfig, OverloadConfig};
use crate::temporal::PeriodBucket;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Change in volume compared with the previous period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverloadStatus {
    /// No usable previous period to compare against
    Baseline,
    /// Volume rose by more than the progression threshold
    Progressing,
    /// Volume stayed within the progression threshold
    Maintaining,
    /// Volume fell by more than the progression threshold
    Regressing,
    /// Volume rose by more than the spike threshold
    Excessive,
}

/// Classification of one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverloadAssessment {
    /// Key of the classified period
    pub period_key: String,
    /// First day of the classified period
    pub period_start: NaiveDate,
    /// Volume of the classified period
    pub volume: f64,
    /// Percent change from the previous period, absent for baselines
    pub change_percent: Option<f64>,
    /// Classification
    pub status: OverloadStatus,
}

/// Period-over-period overload analyzer
#[derive(Debug, Clone)]
pub struct OverloadAnalyzer {
    config: OverloadConfig,
}

impl Default for OverloadAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl OverloadAnalyzer {
    /// Analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global().overload.clone())
    }

    /// Analyzer with explicit thresholds
    #[must_use]
    pub const fn with_config(config: OverloadConfig) -> Self {
        Self { config }
    }

    /// Classify each bucket against the one before it
    ///
    /// Buckets are compared in the order given, which is chronological for the
    /// output of `group_by_period`.
    #[must_use]
    pub fn classify_progressive_overload(&self, buckets: &[PeriodBucket]) -> Vec<OverloadAssessment> {
        let mut previous_volume: Option<f64> = None;
        buckets
            .iter()
            .map(|bucket| {
                let volume = bucket.aggregated_value;
                let change_percent = previous_volume
                    .filter(|previous| *previous > 0.0)
                    .map(|previous| (volume - previous) / previous * 100.0);
                previous_volume = Some(volume);

                OverloadAssessment {
                    period_key: bucket.period_key.clone(),
                    period_start: bucket.period_start,
                    volume,
                    change_percent,
                    status: change_percent.map_or(OverloadStatus::Baseline, |change| {
                        self.classify_change(change)
                    }),
                }
            })
            .collect()
    }

    /// Classify a single percent change in volume
    #[must_use]
    pub fn classify_change(&self, change_percent: f64) -> OverloadStatus {
        let threshold = self.config.progression_threshold_percent;
        if change_percent > self.config.volume_spike_threshold_percent {
            OverloadStatus::Excessive
        } else if change_percent > threshold {
            OverloadStatus::Progressing
        } else if change_percent < -threshold {
            OverloadStatus::Regressing
        } else {
            OverloadStatus::Maintaining
        }
    }
}
