// ABOUTME: Strength analytics algorithms for the Pierre strength toolkit
// ABOUTME: Regression, descriptive statistics, 1RM, periods, streaks, goals, distribution, overload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Synchronous, side-effect-free analytics over caller-supplied training records.
//! Statistically underdetermined inputs produce degenerate values (zeroed fits,
//! `None`, `insufficient_data`) rather than errors.
//!
//! ## Modules
//!
//! - **`statistical_analysis`**: least-squares regression and descriptive statistics
//! - **strength**: Epley one-rep max, best set, trend classification, personal records
//! - **temporal**: ISO weeks, period boundaries, sparse period bucketing
//! - **streak**: backward streak scan with rest-day tolerance
//! - **`goal_progress`**: expected progress, goal status, completion forecast, required pace
//! - **distribution**: per-category volume and balance scoring
//! - **overload**: period-over-period progressive overload classification

/// Intelligence configuration with environment overrides
pub mod config;

/// Linear regression and descriptive statistics
pub mod statistical_analysis;

/// Bounded LRU memoization of one-rep max estimates
pub mod one_rep_max_cache;

/// Strength metrics built on the regression engine
pub mod strength;

/// Calendar period arithmetic and bucketing
pub mod temporal;

/// Training streak detection
pub mod streak;

/// Goal progress projection
pub mod goal_progress;

/// Category volume aggregation and balance scoring
pub mod distribution;

/// Progressive overload classification
pub mod overload;

pub use config::IntelligenceConfig;
pub use distribution::{
    aggregate_by_category, category_percentages, score_distribution_balance, volume_by_category,
    BalanceScore, BalanceStatus, Categorizer, DistributionAnalyzer, LookupCategorizer,
};
pub use goal_progress::{GoalProgress, GoalProgressEngine, GoalStatus, ProgressPoint, RequiredPace};
pub use one_rep_max_cache::OneRepMaxCache;
pub use overload::{OverloadAnalyzer, OverloadAssessment, OverloadStatus};
pub use statistical_analysis::{OutlierFlag, Point, RegressionResult, StatisticalAnalyzer};
pub use streak::{detect_streak, StreakPolicy, StreakState};
pub use strength::{ExerciseHistoryEntry, StrengthAnalyzer, TrendDirection, TrendResult};
pub use temporal::{
    end_of_period, group_by_period, iso_week_number, period_key, start_of_month,
    start_of_period, start_of_week, start_of_week_on, DateWindow, Dated, PeriodBucket, PeriodType,
};
