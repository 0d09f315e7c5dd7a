// ABOUTME: Training session models: sessions, exercise entries, and individual sets
// ABOUTME: Provides volume (weight x reps) helpers used by aggregation and goal tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single working set
///
/// Inputs are not validated: zero or negative weights produce degenerate
/// downstream results rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Load in kilograms
    pub weight: f64,
    /// Completed repetitions
    pub repetitions: u32,
}

impl SetEntry {
    /// Create a set from a load in kilograms and a repetition count
    #[must_use]
    pub const fn new(weight: f64, repetitions: u32) -> Self {
        Self {
            weight,
            repetitions,
        }
    }

    /// Volume load of this set (weight x reps)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.repetitions)
    }
}

/// One exercise performed within a session, with its sets in performed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Exercise name as recorded by the user (e.g. "Bench Press")
    pub name: String,
    /// Sets in the order they were performed
    pub sets: Vec<SetEntry>,
}

impl ExerciseEntry {
    /// Create an exercise entry
    #[must_use]
    pub fn new(name: impl Into<String>, sets: Vec<SetEntry>) -> Self {
        Self {
            name: name.into(),
            sets,
        }
    }

    /// Total volume load across all sets
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(SetEntry::volume).sum()
    }

    /// Case-insensitive name comparison
    #[must_use]
    pub fn matches(&self, exercise_name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(exercise_name.trim())
    }
}

/// A logged training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// When the session took place (UTC)
    pub date: DateTime<Utc>,
    /// Exercises in performed order
    pub exercises: Vec<ExerciseEntry>,
    /// Session length in minutes, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
}

impl SessionRecord {
    /// Create an empty session at the given instant
    #[must_use]
    pub const fn new(date: DateTime<Utc>) -> Self {
        Self {
            date,
            exercises: Vec::new(),
            duration_minutes: None,
        }
    }

    /// Append an exercise
    #[must_use]
    pub fn with_exercise(mut self, exercise: ExerciseEntry) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Set the session duration
    #[must_use]
    pub fn with_duration_minutes(mut self, minutes: f64) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Calendar day (UTC) of the session
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Total volume load across every exercise
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.exercises.iter().map(ExerciseEntry::volume).sum()
    }

    /// Total number of sets performed
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}
