// ABOUTME: Training streak detection by scanning calendar days backward from today
// ABOUTME: Supports a rest-day tolerance; only a run reaching today counts as the current streak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Streak detection
//!
//! The scan starts at today and walks back one day at a time to the earliest
//! training day. Each trained day extends the running streak. A gap longer than
//! the rest-day tolerance closes the run: the first closed run is the current
//! streak, every run competes for the longest. Missed days inside the tolerance
//! neither extend nor break a streak.

use crate::config::intelligence::{IntelligenceConfig, StreakConfig};
use crate::temporal::Dated;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Rest-day tolerance for a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakPolicy {
    /// Whether missed days up to the limit keep a streak alive
    pub allow_rest_days: bool,
    /// Consecutive missed days tolerated when rest days are allowed
    pub max_rest_days_per_week: u32,
}

impl StreakPolicy {
    /// Every missed day breaks the streak
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            allow_rest_days: false,
            max_rest_days_per_week: 0,
        }
    }

    /// Up to `max_rest_days` consecutive missed days are tolerated
    #[must_use]
    pub const fn with_rest_days(max_rest_days: u32) -> Self {
        Self {
            allow_rest_days: true,
            max_rest_days_per_week: max_rest_days,
        }
    }

    const fn tolerated_gap(self) -> u32 {
        if self.allow_rest_days {
            self.max_rest_days_per_week
        } else {
            0
        }
    }
}

impl Default for StreakPolicy {
    fn default() -> Self {
        Self::from(&IntelligenceConfig::global().streak)
    }
}

impl From<&StreakConfig> for StreakPolicy {
    fn from(config: &StreakConfig) -> Self {
        Self {
            allow_rest_days: config.allow_rest_days,
            max_rest_days_per_week: config.max_rest_days_per_week,
        }
    }
}

/// Streak lengths in trained days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    /// Run of trained days reaching today (0 when broken before today)
    pub current_streak: u32,
    /// Longest run anywhere in the history
    pub longest_streak: u32,
}

/// Scan training days backward from `today`
///
/// Accepts plain dates or any dated record. Days are deduplicated by calendar
/// day and days after `today` are ignored.
#[must_use]
pub fn detect_streak<T: Dated>(records: &[T], today: NaiveDate, policy: StreakPolicy) -> StreakState {
    let trained: BTreeSet<NaiveDate> = records
        .iter()
        .map(Dated::day)
        .filter(|day| *day <= today)
        .collect();
    let Some(&earliest) = trained.first() else {
        return StreakState::default();
    };

    let tolerated_gap = policy.tolerated_gap();
    let mut temp_streak: u32 = 0;
    let mut missed_in_row: u32 = 0;
    let mut current_streak: Option<u32> = None;
    let mut longest_streak: u32 = 0;

    let mut cursor = today;
    while cursor >= earliest {
        if trained.contains(&cursor) {
            temp_streak += 1;
            missed_in_row = 0;
        } else {
            missed_in_row += 1;
            if missed_in_row > tolerated_gap && (temp_streak > 0 || current_streak.is_none()) {
                current_streak.get_or_insert(temp_streak);
                longest_streak = longest_streak.max(temp_streak);
                temp_streak = 0;
            }
        }

        let Some(previous) = cursor.checked_sub_days(Days::new(1)) else {
            break;
        };
        cursor = previous;
    }

    longest_streak = longest_streak.max(temp_streak);
    let current_streak = current_streak.unwrap_or(temp_streak);

    debug!(
        trained_days = trained.len(),
        current_streak, longest_streak, "Streak scan complete"
    );

    StreakState {
        current_streak,
        longest_streak,
    }
}
