// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Policy constants for strength metrics, goal status, streaks, and distribution scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Policy values used as configuration defaults. They are fixed contracts of the
//! analytics functions; `IntelligenceConfig` can override them per deployment.

/// Cache sizing constants
pub mod cache;

/// Strength metric policy
pub mod strength {
    /// Above this many reps the Epley estimate is treated as unreliable
    pub const MAX_RELIABLE_REPS: u32 = 15;
    /// Divisor in the Epley formula `weight * (1 + reps / 30)`
    pub const EPLEY_REP_DIVISOR: f64 = 30.0;
    /// Minimum history length (and valid points) for trend classification
    pub const MIN_TREND_SAMPLES: usize = 4;
    /// Per-step percentage change separating up/down from flat
    pub const TREND_THRESHOLD_PERCENT: f64 = 2.5;
}

/// Goal progress policy
pub mod goals {
    /// Days remaining below which an incomplete goal can be at risk
    pub const AT_RISK_DAYS: i64 = 14;
    /// Progress percentage below which a near-deadline goal is at risk
    pub const AT_RISK_PROGRESS_PERCENT: f64 = 80.0;
    /// Width of the on-track band around expected progress
    pub const STATUS_BAND_PERCENT: f64 = 10.0;
    /// Progress value that completes a goal
    pub const COMPLETE_PERCENT: f64 = 100.0;
}

/// Streak policy
pub mod streak {
    /// Consecutive missed days tolerated when rest days are allowed
    pub const DEFAULT_MAX_REST_DAYS_PER_WEEK: u32 = 2;
}

/// Volume distribution and overload policy
pub mod distribution {
    /// Percentage-point tolerance for a balanced category
    pub const BALANCE_TOLERANCE_PERCENT: f64 = 10.0;
    /// Period-over-period volume change that counts as progression
    pub const PROGRESSION_THRESHOLD_PERCENT: f64 = 2.5;
    /// Period-over-period volume increase flagged as a spike
    pub const VOLUME_SPIKE_THRESHOLD_PERCENT: f64 = 10.0;
}

/// Time conversion constants
pub mod time {
    /// Days in a week
    pub const DAYS_PER_WEEK: f64 = 7.0;
}
