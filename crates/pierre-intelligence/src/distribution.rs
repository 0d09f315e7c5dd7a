// ABOUTME: Per-category volume aggregation and training distribution balance scoring
// ABOUTME: Categories come from an injected Categorizer; one exercise may feed several categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Volume and distribution aggregation
//!
//! An exercise contributes its full volume to every category it belongs to, so a
//! bench press counted under both chest and triceps adds to both totals.

use crate::config::intelligence::{DistributionConfig, IntelligenceConfig};
use crate::temporal::DateWindow;
use pierre_core::models::{ExerciseEntry, SessionRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Maps an exercise name to the categories it trains
pub trait Categorizer {
    /// Categories for an exercise; empty when unknown
    fn categories(&self, exercise_name: &str) -> BTreeSet<String>;
}

impl<F> Categorizer for F
where
    F: Fn(&str) -> BTreeSet<String>,
{
    fn categories(&self, exercise_name: &str) -> BTreeSet<String> {
        self(exercise_name)
    }
}

/// Table-driven categorizer with case-insensitive exercise names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupCategorizer {
    table: HashMap<String, BTreeSet<String>>,
}

impl LookupCategorizer {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exercise with its categories, merging with any existing entry
    #[must_use]
    pub fn with_exercise<I, S>(mut self, exercise_name: &str, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(exercise_name, categories);
        self
    }

    /// Add an exercise with its categories, merging with any existing entry
    pub fn insert<I, S>(&mut self, exercise_name: &str, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table
            .entry(normalize(exercise_name))
            .or_default()
            .extend(categories.into_iter().map(Into::into));
    }

    /// Number of known exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no exercise is known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Categorizer for LookupCategorizer {
    fn categories(&self, exercise_name: &str) -> BTreeSet<String> {
        self.table
            .get(&normalize(exercise_name))
            .cloned()
            .unwrap_or_default()
    }
}

fn normalize(exercise_name: &str) -> String {
    exercise_name.trim().to_lowercase()
}

/// Whether a category is trained as much as expected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Within tolerance of the expected share
    Balanced,
    /// Below the expected share by more than the tolerance
    UnderTrained,
    /// Above the expected share by more than the tolerance
    OverTrained,
}

/// Deviation of one category from its expected share
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceScore {
    /// Category name
    pub category: String,
    /// Actual minus expected percentage points
    pub difference: f64,
    /// Classification of the difference
    pub status: BalanceStatus,
}

/// Sum a value per category over arbitrary records
///
/// Each record adds its full value to every category it maps to.
#[must_use]
pub fn aggregate_by_category<T, C, V>(
    records: &[T],
    categorize: C,
    value_of: V,
) -> BTreeMap<String, f64>
where
    C: Fn(&T) -> BTreeSet<String>,
    V: Fn(&T) -> f64,
{
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        let categories = categorize(record);
        if categories.is_empty() {
            continue;
        }
        let value = value_of(record);
        for category in categories {
            *totals.entry(category).or_insert(0.0) += value;
        }
    }
    totals
}

/// Volume load per category for sessions inside an optional window
#[must_use]
pub fn volume_by_category<C>(
    records: &[SessionRecord],
    categorizer: &C,
    window: Option<&DateWindow>,
) -> BTreeMap<String, f64>
where
    C: Categorizer + ?Sized,
{
    let exercises: Vec<&ExerciseEntry> = records
        .iter()
        .filter(|record| window.is_none_or(|w| w.contains(record.day())))
        .flat_map(|record| record.exercises.iter())
        .collect();

    let totals = aggregate_by_category(
        &exercises,
        |entry| categorizer.categories(&entry.name),
        |entry| entry.volume(),
    );
    debug!(
        exercises = exercises.len(),
        categories = totals.len(),
        "Aggregated volume by category"
    );
    totals
}

/// Share of the grand total per category, in percent
///
/// All shares are 0 when the grand total is 0.
#[must_use]
pub fn category_percentages(totals: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    let grand_total: f64 = totals.values().sum();
    totals
        .iter()
        .map(|(category, value)| {
            let share = if grand_total > 0.0 {
                value / grand_total * 100.0
            } else {
                0.0
            };
            (category.clone(), share)
        })
        .collect()
}

/// Compare actual against expected percentages, most under-trained first
///
/// Categories present on only one side count as 0 on the other. Equal
/// differences keep alphabetical order.
#[must_use]
pub fn score_distribution_balance(
    actual: &BTreeMap<String, f64>,
    expected: &BTreeMap<String, f64>,
    tolerance: f64,
) -> Vec<BalanceScore> {
    let categories: BTreeSet<&String> = actual.keys().chain(expected.keys()).collect();

    let mut scores: Vec<BalanceScore> = categories
        .into_iter()
        .map(|category| {
            let difference = actual.get(category).copied().unwrap_or(0.0)
                - expected.get(category).copied().unwrap_or(0.0);
            let status = if difference.abs() <= tolerance {
                BalanceStatus::Balanced
            } else if difference < 0.0 {
                BalanceStatus::UnderTrained
            } else {
                BalanceStatus::OverTrained
            };
            BalanceScore {
                category: category.clone(),
                difference,
                status,
            }
        })
        .collect();

    scores.sort_by(|a, b| a.difference.total_cmp(&b.difference));
    scores
}

/// Distribution scoring with a configured tolerance
#[derive(Debug, Clone)]
pub struct DistributionAnalyzer {
    config: DistributionConfig,
}

impl Default for DistributionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DistributionAnalyzer {
    /// Analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global().distribution.clone())
    }

    /// Analyzer with an explicit configuration
    #[must_use]
    pub const fn with_config(config: DistributionConfig) -> Self {
        Self { config }
    }

    /// Score actual volume totals against expected percentages
    #[must_use]
    pub fn score_volume_balance(
        &self,
        totals: &BTreeMap<String, f64>,
        expected: &BTreeMap<String, f64>,
    ) -> Vec<BalanceScore> {
        score_distribution_balance(
            &category_percentages(totals),
            expected,
            self.config.balance_tolerance_percent,
        )
    }

    /// Score actual against expected percentages
    #[must_use]
    pub fn score_balance(
        &self,
        actual: &BTreeMap<String, f64>,
        expected: &BTreeMap<String, f64>,
    ) -> Vec<BalanceScore> {
        score_distribution_balance(actual, expected, self.config.balance_tolerance_percent)
    }
}
