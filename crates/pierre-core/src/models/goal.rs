// ABOUTME: Goal definitions supplied by the goal/template store
// ABOUTME: Strength, volume, frequency, and custom goals with a target value and deadline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What a goal measures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GoalType {
    /// Reach an estimated one-rep max (kg) on a named exercise
    Strength {
        /// Exercise the goal tracks
        exercise_name: String,
    },
    /// Accumulate volume load (kg) for a training category within the goal window
    Volume {
        /// Category (e.g. muscle group) the goal tracks
        category: String,
    },
    /// Complete a number of sessions within the goal window
    Frequency,
    /// Externally measured metric; the caller supplies the current value
    Custom {
        /// Metric name
        metric: String,
    },
}

/// A goal with its target and time window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDefinition {
    /// What is being measured
    pub goal_type: GoalType,
    /// Value that completes the goal
    pub target_value: f64,
    /// First day of the goal window
    pub start_date: NaiveDate,
    /// Last day of the goal window
    pub deadline: NaiveDate,
}

impl GoalDefinition {
    /// Create a goal definition
    #[must_use]
    pub const fn new(
        goal_type: GoalType,
        target_value: f64,
        start_date: NaiveDate,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            goal_type,
            target_value,
            start_date,
            deadline,
        }
    }
}
