// ABOUTME: Core data models for strength training records and goal definitions
// ABOUTME: Re-exports SessionRecord, ExerciseEntry, SetEntry, and GoalDefinition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Value types supplied by the external record and goal stores. The analytics
//! crates only borrow these for the duration of a call and never mutate them.
//!
//! ## Units
//!
//! - Weight is always kilograms; display-unit conversion belongs to the presentation layer
//! - Session timestamps are UTC instants, analytics work on their calendar day

mod goal;
mod session;

pub use goal::{GoalDefinition, GoalType};
pub use session::{ExerciseEntry, SessionRecord, SetEntry};
