// ABOUTME: Shared fixtures for integration tests of the strength analytics toolkit
// ABOUTME: Provides date helpers, session builders, and quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_strength`

use chrono::{NaiveDate, TimeZone, Utc};
use pierre_strength::logging::{init_logging, LogFormat, LoggingConfig};
use pierre_strength::models::{ExerciseEntry, SessionRecord, SetEntry};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for floating point comparisons
pub const EPSILON: f64 = 1e-6;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let config = LoggingConfig {
            level: "warn".into(),
            format: LogFormat::Compact,
            ..LoggingConfig::default()
        };
        // Another test binary helper may already own the global subscriber
        let _ = init_logging(&config);
    });
}

/// Assert two floats are within `EPSILON`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Session at noon UTC on the given day with a single exercise
pub fn session(day: NaiveDate, exercise: &str, sets: &[(f64, u32)]) -> SessionRecord {
    let noon = day.and_hms_opt(12, 0, 0).unwrap();
    SessionRecord::new(Utc.from_utc_datetime(&noon)).with_exercise(exercise_entry(exercise, sets))
}

/// Exercise entry from `(weight, reps)` pairs
pub fn exercise_entry(name: &str, sets: &[(f64, u32)]) -> ExerciseEntry {
    ExerciseEntry::new(
        name,
        sets.iter()
            .map(|&(weight, reps)| SetEntry::new(weight, reps))
            .collect(),
    )
}
