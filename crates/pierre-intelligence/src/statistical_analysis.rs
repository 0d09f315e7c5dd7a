// ABOUTME: Statistical analysis engine for strength trend calculations
// ABOUTME: Implements least-squares regression, descriptive statistics, smoothing, and IQR outliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: statistical calculations with controlled ranges

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::warn;

/// Lower quartile position used by IQR outlier detection
const Q1_POSITION: f64 = 0.25;

/// Upper quartile position used by IQR outlier detection
const Q3_POSITION: f64 = 0.75;

/// Tukey fence multiplier applied to the IQR
const IQR_FENCE_MULTIPLIER: f64 = 1.5;

/// Input point for regression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Independent variable, usually a workout ordinal or day offset
    pub x: f64,
    /// Observed value
    pub y: f64,
}

impl Point {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordinary least-squares fit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (rate of change)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
}

impl RegressionResult {
    /// Value of the fitted line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Per-value outlier classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierFlag {
    /// The observed value
    pub value: f64,
    /// Position in the input sequence
    pub index: usize,
    /// Whether the value lies outside the IQR fences
    pub is_outlier: bool,
}

/// Statistical analyzer with closed-form implementations
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Ordinary least-squares linear regression
    ///
    /// Fewer than two points yield a zeroed result. When every x is identical the
    /// slope denominator is zero and the result carries `NaN`; callers supplying
    /// sequential indices never hit this.
    #[must_use]
    pub fn linear_regression(points: &[Point]) -> RegressionResult {
        if points.len() < 2 {
            return RegressionResult::default();
        }

        let n = points.len() as f64;
        let sum_x = points.iter().map(|p| p.x).sum::<f64>();
        let sum_y = points.iter().map(|p| p.y).sum::<f64>();
        let sum_xx = points.iter().map(|p| p.x * p.x).sum::<f64>();
        let sum_xy = points.iter().map(|p| p.x * p.y).sum::<f64>();

        let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
        if denominator == 0.0 {
            warn!(
                points = points.len(),
                "Linear regression input has zero variance in x; result is undefined"
            );
        }

        let slope = n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator;
        let intercept = slope.mul_add(-sum_x, sum_y) / n;

        let mean_y = sum_y / n;
        let ss_tot = points.iter().map(|p| (p.y - mean_y).powi(2)).sum::<f64>();
        let ss_res = points
            .iter()
            .map(|p| (p.y - slope.mul_add(p.x, intercept)).powi(2))
            .sum::<f64>();

        // Constant y is fitted exactly by the horizontal line
        let r_squared = if ss_tot == 0.0 && denominator != 0.0 {
            1.0
        } else {
            1.0 - ss_res / ss_tot
        };

        RegressionResult {
            slope,
            intercept,
            r_squared,
        }
    }

    /// Arithmetic mean, 0 for empty input
    #[must_use]
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Population standard deviation (divides by n), 0 for empty input
    #[must_use]
    pub fn standard_deviation(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mean = Self::mean(values);
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }

    /// Percentage of the dataset strictly below `value`
    ///
    /// Uses the position of the first element `>= value` in the sorted dataset;
    /// returns 100 when `value` exceeds every element and 0 for an empty dataset.
    #[must_use]
    pub fn percentile_rank(value: f64, dataset: &[f64]) -> f64 {
        if dataset.is_empty() {
            return 0.0;
        }
        let sorted = Self::sorted(dataset);
        sorted
            .iter()
            .position(|&v| v >= value)
            .map_or(100.0, |index| 100.0 * index as f64 / sorted.len() as f64)
    }

    /// Centered moving average
    ///
    /// Returns the input unchanged when it is shorter than the window or the
    /// window is 0 or 1. Near either end the window is truncated symmetrically,
    /// so reversing the input reverses the output.
    #[must_use]
    pub fn moving_average(data: &[f64], window_size: usize) -> Vec<f64> {
        if window_size <= 1 || data.len() < window_size {
            return data.to_vec();
        }

        (0..data.len())
            .map(|i| {
                let start = i.saturating_sub(window_size / 2);
                let end = (i + window_size - window_size / 2).min(data.len());
                let window_sum: f64 = data[start..end].iter().sum();
                window_sum / (end - start) as f64
            })
            .collect()
    }

    /// Flag outliers using the interquartile range
    ///
    /// Quartiles are read at indices `floor(n * 0.25)` and `floor(n * 0.75)` of the
    /// sorted values, without interpolation.
    #[must_use]
    pub fn detect_outliers(values: &[f64]) -> Vec<OutlierFlag> {
        if values.is_empty() {
            return Vec::new();
        }

        let sorted = Self::sorted(values);
        let n = sorted.len() as f64;
        let q1 = sorted[Self::quartile_index(n, Q1_POSITION, sorted.len())];
        let q3 = sorted[Self::quartile_index(n, Q3_POSITION, sorted.len())];
        let iqr = q3 - q1;
        let lower = IQR_FENCE_MULTIPLIER.mul_add(-iqr, q1);
        let upper = IQR_FENCE_MULTIPLIER.mul_add(iqr, q3);

        values
            .iter()
            .enumerate()
            .map(|(index, &value)| OutlierFlag {
                value,
                index,
                is_outlier: value < lower || value > upper,
            })
            .collect()
    }

    fn quartile_index(n: f64, position: f64, len: usize) -> usize {
        ((n * position).floor() as usize).min(len - 1)
    }

    fn sorted(values: &[f64]) -> Vec<f64> {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        sorted
    }
}
