// ABOUTME: Benchmark fixtures generating realistic strength training logs
// ABOUTME: Provides deterministic session data for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures generating realistic strength training logs.
//!
//! Data is deterministic: the same batch size always yields the same sessions.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use pierre_strength::intelligence::LookupCategorizer;
use pierre_strength::models::{ExerciseEntry, SessionRecord, SetEntry};

/// Exercise rotation used by generated sessions
const EXERCISES: [(&str, &[&str]); 5] = [
    ("Squat", &["legs", "glutes"]),
    ("Bench Press", &["chest", "triceps"]),
    ("Deadlift", &["back", "legs"]),
    ("Overhead Press", &["shoulders", "triceps"]),
    ("Barbell Row", &["back", "biceps"]),
];

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SessionBatchSize {
    /// One training block (24 sessions)
    Small,
    /// About a year of training (200 sessions)
    Medium,
    /// Several years of training (1000 sessions)
    Large,
}

impl SessionBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 24,
            Self::Medium => 200,
            Self::Large => 1000,
        }
    }
}

/// Day the generated log ends on
#[must_use]
pub fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap_or(NaiveDate::MIN)
}

fn reference_instant() -> DateTime<Utc> {
    reference_day()
        .and_hms_opt(18, 0, 0)
        .map_or_else(Utc::now, |noon| Utc.from_utc_datetime(&noon))
}

/// Generate a single session (internal use only)
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn generate_session(index: usize, count: usize) -> SessionRecord {
    // Roughly three sessions per week, oldest first
    let days_ago = ((count - index) * 7 / 3) as i64;
    let date = reference_instant() - Duration::days(days_ago);
    let progression = index as f64 * 0.25;

    (0..3).fold(SessionRecord::new(date), |record, offset| {
        let (name, _) = EXERCISES[(index + offset) % EXERCISES.len()];
        let base = 60.0 + (offset as f64) * 20.0 + progression;
        let sets = (0..4)
            .map(|set| SetEntry::new(base + f64::from(set) * 2.5, 8 - set))
            .collect();
        record.with_exercise(ExerciseEntry::new(name, sets))
    })
}

/// Generate a training log of the given size, oldest session first
#[must_use]
pub fn generate_sessions(size: SessionBatchSize) -> Vec<SessionRecord> {
    let count = size.count();
    (0..count).map(|index| generate_session(index, count)).collect()
}

/// Categorizer covering every generated exercise
#[must_use]
pub fn categorizer() -> LookupCategorizer {
    EXERCISES
        .iter()
        .fold(LookupCategorizer::new(), |categorizer, (name, groups)| {
            categorizer.with_exercise(name, groups.iter().copied())
        })
}
