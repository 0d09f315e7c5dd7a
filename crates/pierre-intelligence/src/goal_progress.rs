// ABOUTME: Goal progress projection: expected progress, status, completion forecast, required pace
// ABOUTME: Measures current values for strength, volume, and frequency goals from session records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal progress projection
//!
//! Progress is linear in time: a goal halfway between its start date and deadline
//! is expected to be 50% complete. Status checks run in a fixed order so that a
//! goal close to its deadline and well short of the target is flagged at risk
//! even when it is ahead of the linear expectation.

use crate::config::intelligence::{GoalProgressConfig, IntelligenceConfig, StrengthConfig};
use crate::distribution::{volume_by_category, Categorizer};
use crate::statistical_analysis::{Point, StatisticalAnalyzer};
use crate::strength::StrengthAnalyzer;
use crate::temporal::{DateWindow, Dated};
use chrono::{NaiveDate, TimeDelta};
use pierre_core::constants::{goals::COMPLETE_PERCENT, time::DAYS_PER_WEEK};
use pierre_core::models::{GoalDefinition, GoalType, SessionRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Goal status relative to the linear expectation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Within the band around expected progress
    OnTrack,
    /// Above the band
    Ahead,
    /// Below the band
    Behind,
    /// Close to the deadline and well short of the target
    AtRisk,
    /// Target reached
    Completed,
}

/// Snapshot of a goal's progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Measured value
    pub current_value: f64,
    /// Value that completes the goal
    pub target_value: f64,
    /// Share of the target reached, clamped to 0..=100
    pub progress_percent: f64,
    /// Share expected by now under linear progress, clamped to 0..=100
    pub expected_progress_percent: f64,
    /// Classification
    pub status: GoalStatus,
    /// Days until the deadline (negative once it has passed)
    pub days_remaining: i64,
}

/// Rate needed to reach a target by the deadline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequiredPace {
    /// Units per day
    pub per_day: f64,
    /// Units per week
    pub per_week: f64,
    /// Units still missing
    pub total: f64,
}

/// A measured value on a day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    /// Day of the measurement
    pub date: NaiveDate,
    /// Measured value
    pub value: f64,
}

impl ProgressPoint {
    /// Create a progress point
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

impl Dated for ProgressPoint {
    fn day(&self) -> NaiveDate {
        self.date
    }
}

/// Goal progress engine
#[derive(Debug, Clone)]
pub struct GoalProgressEngine {
    config: GoalProgressConfig,
    strength: StrengthAnalyzer,
}

impl Default for GoalProgressEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalProgressEngine {
    /// Engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        let global = IntelligenceConfig::global();
        Self {
            config: global.goals.clone(),
            strength: StrengthAnalyzer::with_config(global.strength.clone()),
        }
    }

    /// Engine with explicit goal thresholds and default strength settings
    #[must_use]
    pub fn with_config(config: GoalProgressConfig) -> Self {
        Self {
            config,
            strength: StrengthAnalyzer::with_config(StrengthConfig::default()),
        }
    }

    /// Replace the analyzer used to measure strength goals
    #[must_use]
    pub fn with_strength_analyzer(mut self, strength: StrengthAnalyzer) -> Self {
        self.strength = strength;
        self
    }

    /// Active goal thresholds
    #[must_use]
    pub const fn config(&self) -> &GoalProgressConfig {
        &self.config
    }

    /// Progress expected by `now` if the goal advanced linearly from start to deadline
    ///
    /// A window of zero or negative length is either fully expected (deadline
    /// reached) or not expected at all.
    #[must_use]
    pub fn expected_progress_percent(start: NaiveDate, deadline: NaiveDate, now: NaiveDate) -> f64 {
        let total_days = (deadline - start).num_days();
        if total_days <= 0 {
            return if now >= deadline { COMPLETE_PERCENT } else { 0.0 };
        }
        let days_passed = (now - start).num_days();
        (days_passed as f64 / total_days as f64 * 100.0).clamp(0.0, COMPLETE_PERCENT)
    }

    /// Share of the target reached, clamped to 0..=100
    ///
    /// A non-positive target counts as reached.
    #[must_use]
    pub fn progress_percent(current_value: f64, target_value: f64) -> f64 {
        if target_value <= 0.0 {
            return COMPLETE_PERCENT;
        }
        (current_value / target_value * 100.0).clamp(0.0, COMPLETE_PERCENT)
    }

    /// Classify a goal; completion, then risk, then the band around expectation
    #[must_use]
    pub fn classify_goal_status(
        &self,
        current_progress: f64,
        expected_progress: f64,
        days_remaining: i64,
    ) -> GoalStatus {
        let band = self.config.status_band_percent;
        if current_progress >= COMPLETE_PERCENT {
            GoalStatus::Completed
        } else if days_remaining < self.config.at_risk_days
            && current_progress < self.config.at_risk_progress_percent
        {
            GoalStatus::AtRisk
        } else if current_progress > expected_progress + band {
            GoalStatus::Ahead
        } else if current_progress < expected_progress - band {
            GoalStatus::Behind
        } else {
            GoalStatus::OnTrack
        }
    }

    /// Forecast the day the target is reached by extrapolating the history trend
    ///
    /// Returns `now` when the target is already met, and `None` with fewer than
    /// two points, a flat or declining trend, or a date outside the calendar.
    #[must_use]
    pub fn predict_completion_date(
        history: &[ProgressPoint],
        target_value: f64,
        now: NaiveDate,
    ) -> Option<NaiveDate> {
        if history.len() < 2 {
            return None;
        }
        let mut ordered: Vec<&ProgressPoint> = history.iter().collect();
        ordered.sort_by_key(|point| point.date);

        let (first, last) = (ordered.first()?, ordered.last()?);
        if last.value >= target_value {
            return Some(now);
        }

        let points: Vec<Point> = ordered
            .iter()
            .enumerate()
            .map(|(index, point)| Point::new(index as f64, point.value))
            .collect();
        let regression = StatisticalAnalyzer::linear_regression(&points);
        if regression.slope.is_nan() || regression.slope <= 0.0 {
            debug!(
                slope = regression.slope,
                "No completion forecast for a flat or declining trend"
            );
            return None;
        }

        let last_index = (ordered.len() - 1) as f64;
        let target_index = (target_value - regression.intercept) / regression.slope;
        if target_index <= last_index {
            return Some(now);
        }

        let average_gap_days = (last.date - first.date).num_days() as f64 / last_index;
        let offset_days = ((target_index - last_index) * average_gap_days).ceil();
        if !offset_days.is_finite() || offset_days > i64::MAX as f64 {
            return None;
        }
        let predicted = last
            .date
            .checked_add_signed(TimeDelta::try_days(offset_days as i64)?)?;
        Some(predicted.max(now))
    }

    /// Pace needed to close the gap to the target
    ///
    /// `days_remaining` must be non-zero; zero yields infinite or NaN rates.
    #[must_use]
    pub fn required_pace(current_value: f64, target_value: f64, days_remaining: i64) -> RequiredPace {
        let total = target_value - current_value;
        let days = days_remaining as f64;
        RequiredPace {
            per_day: total / days,
            per_week: total / (days / DAYS_PER_WEEK),
            total,
        }
    }

    /// Progress snapshot for a goal given its measured value
    #[must_use]
    pub fn track_progress(
        &self,
        goal: &GoalDefinition,
        current_value: f64,
        now: NaiveDate,
    ) -> GoalProgress {
        let progress_percent = Self::progress_percent(current_value, goal.target_value);
        let expected_progress_percent =
            Self::expected_progress_percent(goal.start_date, goal.deadline, now);
        let days_remaining = (goal.deadline - now).num_days();
        let status =
            self.classify_goal_status(progress_percent, expected_progress_percent, days_remaining);

        GoalProgress {
            current_value,
            target_value: goal.target_value,
            progress_percent,
            expected_progress_percent,
            status,
            days_remaining,
        }
    }

    /// Current value of a goal measured from sessions between its start date and `now`
    ///
    /// Strength goals use the best estimated one-rep max, volume goals the
    /// category volume, frequency goals the session count. Custom goals are
    /// measured by the caller and yield `None`.
    #[must_use]
    pub fn measure_current_value<C>(
        &self,
        goal: &GoalDefinition,
        records: &[SessionRecord],
        categorizer: &C,
        now: NaiveDate,
    ) -> Option<f64>
    where
        C: Categorizer + ?Sized,
    {
        let window = DateWindow::new(goal.start_date, now);
        match &goal.goal_type {
            GoalType::Strength { exercise_name } => {
                let mut history = StrengthAnalyzer::exercise_history(records, exercise_name);
                history.retain(|entry| window.contains(entry.date));
                Some(self.strength.best_one_rep_max(&history).unwrap_or(0.0))
            }
            GoalType::Volume { category } => Some(
                volume_by_category(records, categorizer, Some(&window))
                    .get(category)
                    .copied()
                    .unwrap_or(0.0),
            ),
            GoalType::Frequency => Some(window.filter(records).count() as f64),
            GoalType::Custom { metric } => {
                debug!(metric = %metric, "Custom goal metrics are measured by the caller");
                None
            }
        }
    }
}
