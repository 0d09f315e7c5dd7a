// ABOUTME: Size-bounded LRU memoization for estimated one-rep-max values
// ABOUTME: Injected into StrengthAnalyzer by callers instead of living in global state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::StrengthConfig;
use lru::LruCache;
use pierre_core::constants::cache::DEFAULT_ONE_REP_MAX_CACHE_ENTRIES;
use std::num::NonZeroUsize;

/// Cache key: the weight's IEEE-754 bits plus the rep count
type CacheKey = (u64, u32);

/// LRU cache of `(weight, reps) -> estimated 1RM`
///
/// Purely an optimization: results are identical with or without it. Owned by
/// the caller so the analytics functions themselves stay free of hidden state.
#[derive(Debug)]
pub struct OneRepMaxCache {
    entries: LruCache<CacheKey, Option<f64>>,
}

impl OneRepMaxCache {
    /// Fallback capacity when zero is requested
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_ONE_REP_MAX_CACHE_ENTRIES)
    {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache holding at most `capacity` entries (0 selects the default)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Create a cache sized by `one_rep_max_cache_capacity`
    #[must_use]
    pub fn from_config(config: &StrengthConfig) -> Self {
        Self::new(config.one_rep_max_cache_capacity)
    }

    /// Return the cached estimate, computing and storing it on a miss
    pub fn get_or_compute(
        &mut self,
        weight: f64,
        repetitions: u32,
        compute: impl FnOnce() -> Option<f64>,
    ) -> Option<f64> {
        *self
            .entries
            .get_or_insert((weight.to_bits(), repetitions), compute)
    }

    /// Number of cached estimates
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries retained
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Drop every cached estimate
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for OneRepMaxCache {
    fn default() -> Self {
        Self::new(DEFAULT_ONE_REP_MAX_CACHE_ENTRIES)
    }
}
