// ABOUTME: Cache-related constants for bounded memoization
// ABOUTME: Capacity defaults for the one-rep-max LRU cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default capacity of the `(weight, reps)` one-rep-max cache
pub const DEFAULT_ONE_REP_MAX_CACHE_ENTRIES: usize = 256;

/// Upper bound accepted for a configured cache capacity
pub const MAX_ONE_REP_MAX_CACHE_ENTRIES: usize = 100_000;
