// ABOUTME: Library entry point for the Pierre strength analytics toolkit
// ABOUTME: Re-exports the data model, error types, and analytics engines with logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength
//!
//! A statistics and progress-analytics toolkit for strength training logs. It
//! computes derived views over caller-supplied session records: regression
//! trends, estimated one-rep maxes, period buckets, streaks, goal projections,
//! and training distribution.
//!
//! ## Architecture
//!
//! - **models**: sessions, exercises, sets, and goal definitions (`pierre-core`)
//! - **errors**: `AppError`, `ErrorCode`, `AppResult` (`pierre-core`)
//! - **intelligence**: all analytics algorithms and their configuration (`pierre-intelligence`)
//! - **logging**: `tracing-subscriber` setup for embedding applications
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_strength::intelligence::StrengthAnalyzer;
//! use pierre_strength::models::SetEntry;
//!
//! let sets = [SetEntry::new(100.0, 5), SetEntry::new(80.0, 10)];
//! let best = StrengthAnalyzer::best_set(&sets);
//! assert_eq!(best, Some(SetEntry::new(80.0, 10)));
//! ```

/// Training record and goal data models
pub use pierre_core::models;

/// Unified error handling with standard error codes
pub use pierre_core::errors;

/// Policy constants organized by domain
pub use pierre_core::constants;

/// Analytics algorithms and configuration
pub use pierre_intelligence as intelligence;

/// Structured logging configuration and initialization
pub mod logging;
