// ABOUTME: Strength metrics: estimated one-rep max, best-set selection, PRs, and trend detection
// ABOUTME: Builds per-exercise history from sessions and classifies progress via linear regression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength metrics
//!
//! Estimated 1RM uses the Epley formula `weight * (1 + reps / 30)`. A single rep
//! returns the weight as lifted; above the reliable rep ceiling no estimate is made.

use crate::config::intelligence::{IntelligenceConfig, StrengthConfig};
use crate::one_rep_max_cache::OneRepMaxCache;
use crate::statistical_analysis::{Point, StatisticalAnalyzer};
use crate::temporal::Dated;
use chrono::NaiveDate;
use pierre_core::constants::strength::EPLEY_REP_DIVISOR;
use pierre_core::models::{SessionRecord, SetEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Best set of one exercise in one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistoryEntry {
    /// Session day
    pub date: NaiveDate,
    /// Highest weight x reps set performed that day
    pub best_set: SetEntry,
}

impl Dated for ExerciseHistoryEntry {
    fn day(&self) -> NaiveDate {
        self.date
    }
}

/// Direction of a strength trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Estimated 1RM rising faster than the threshold
    Up,
    /// Estimated 1RM falling faster than the threshold
    Down,
    /// Change within the threshold band
    Flat,
    /// Not enough valid sessions to fit a trend
    InsufficientData,
}

/// Outcome of trend classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Classified direction
    pub direction: TrendDirection,
    /// Regression slope as a percentage of the mean estimated 1RM
    pub percentage_change: f64,
    /// R-squared of the fit (0-1)
    pub confidence: f64,
}

impl TrendResult {
    /// Result returned when the history is too short
    #[must_use]
    pub const fn insufficient_data() -> Self {
        Self {
            direction: TrendDirection::InsufficientData,
            percentage_change: 0.0,
            confidence: 0.0,
        }
    }
}

/// Strength metrics calculator
#[derive(Debug, Clone)]
pub struct StrengthAnalyzer {
    config: StrengthConfig,
}

impl Default for StrengthAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StrengthAnalyzer {
    /// Create an analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().strength.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: StrengthConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &StrengthConfig {
        &self.config
    }

    /// Estimated one-rep max via the Epley formula
    ///
    /// Returns `None` above the reliable rep ceiling (15 by default).
    #[must_use]
    pub fn estimated_one_rep_max(&self, weight: f64, repetitions: u32) -> Option<f64> {
        if repetitions == 1 {
            return Some(weight);
        }
        if repetitions > self.config.max_reliable_reps {
            return None;
        }
        Some(weight * (1.0 + f64::from(repetitions) / EPLEY_REP_DIVISOR))
    }

    /// Empty 1RM cache sized from this analyzer's configuration
    #[must_use]
    pub fn new_cache(&self) -> OneRepMaxCache {
        OneRepMaxCache::from_config(&self.config)
    }

    /// Estimated one-rep max memoized in a caller-owned cache
    pub fn estimated_one_rep_max_cached(
        &self,
        cache: &mut OneRepMaxCache,
        weight: f64,
        repetitions: u32,
    ) -> Option<f64> {
        cache.get_or_compute(weight, repetitions, || {
            self.estimated_one_rep_max(weight, repetitions)
        })
    }

    /// Estimated one-rep max of a set
    #[must_use]
    pub fn set_one_rep_max(&self, set: &SetEntry) -> Option<f64> {
        self.estimated_one_rep_max(set.weight, set.repetitions)
    }

    /// Set with the highest weight x reps; the first of equal sets wins
    #[must_use]
    pub fn best_set(sets: &[SetEntry]) -> Option<SetEntry> {
        sets.iter().copied().fold(None, |best, set| match best {
            Some(current) if set.volume() <= current.volume() => Some(current),
            Some(current) if set.volume().is_nan() => Some(current),
            _ => Some(set),
        })
    }

    /// Per-session best sets for one exercise, oldest first
    ///
    /// Names match case-insensitively. A session that logs the exercise more than
    /// once contributes a single entry built from all of its sets.
    #[must_use]
    pub fn exercise_history(
        records: &[SessionRecord],
        exercise_name: &str,
    ) -> Vec<ExerciseHistoryEntry> {
        let mut sessions: Vec<&SessionRecord> = records.iter().collect();
        sessions.sort_by_key(|record| record.date);

        sessions
            .into_iter()
            .filter_map(|record| {
                let sets: Vec<SetEntry> = record
                    .exercises
                    .iter()
                    .filter(|entry| entry.matches(exercise_name))
                    .flat_map(|entry| entry.sets.iter().copied())
                    .collect();
                Self::best_set(&sets).map(|best_set| ExerciseHistoryEntry {
                    date: record.day(),
                    best_set,
                })
            })
            .collect()
    }

    /// Classify the estimated-1RM trend of an exercise history
    ///
    /// Points use the entry's position in the full history as x, so entries
    /// without a usable estimate leave gaps rather than shifting later sessions.
    #[must_use]
    pub fn classify_trend(&self, history: &[ExerciseHistoryEntry]) -> TrendResult {
        let min_samples = self.config.min_trend_samples;
        if history.len() < min_samples {
            debug!(
                samples = history.len(),
                required = min_samples,
                "Trend classification skipped: history too short"
            );
            return TrendResult::insufficient_data();
        }

        let points: Vec<Point> = history
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                self.set_one_rep_max(&entry.best_set)
                    .filter(|&one_rm| one_rm > 0.0)
                    .map(|one_rm| Point::new(index as f64, one_rm))
            })
            .collect();

        if points.len() < min_samples {
            debug!(
                valid_points = points.len(),
                required = min_samples,
                "Trend classification skipped: too few valid estimates"
            );
            return TrendResult::insufficient_data();
        }

        let regression = StatisticalAnalyzer::linear_regression(&points);
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let mean_y = StatisticalAnalyzer::mean(&ys);
        let percentage_change = (regression.slope / mean_y) * 100.0;

        let threshold = self.config.trend_threshold_percent;
        let direction = if percentage_change > threshold {
            TrendDirection::Up
        } else if percentage_change < -threshold {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };

        TrendResult {
            direction,
            percentage_change,
            confidence: regression.r_squared,
        }
    }

    /// History entry with the highest estimated 1RM
    ///
    /// Entries without an estimate are skipped; the earliest of equal maxima wins.
    #[must_use]
    pub fn find_personal_record<'a>(
        &self,
        history: &'a [ExerciseHistoryEntry],
    ) -> Option<&'a ExerciseHistoryEntry> {
        history
            .iter()
            .filter_map(|entry| {
                self.set_one_rep_max(&entry.best_set)
                    .map(|one_rm| (entry, one_rm))
            })
            .fold(None, |best: Option<(&ExerciseHistoryEntry, f64)>, candidate| {
                match best {
                    Some((_, best_rm)) if candidate.1 <= best_rm => best,
                    _ => Some(candidate),
                }
            })
            .map(|(entry, _)| entry)
    }

    /// Highest estimated 1RM over an exercise history
    #[must_use]
    pub fn best_one_rep_max(&self, history: &[ExerciseHistoryEntry]) -> Option<f64> {
        self.find_personal_record(history)
            .and_then(|entry| self.set_one_rep_max(&entry.best_set))
    }
}
