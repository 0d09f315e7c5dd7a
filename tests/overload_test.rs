// ABOUTME: Integration tests for progressive overload classification
// ABOUTME: Covers baselines, threshold bands, spikes, and zero-volume periods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Days;
use common::{assert_close, date, session};
use pierre_strength::intelligence::config::OverloadConfig;
use pierre_strength::intelligence::{
    group_by_period, end_of_period, period_key, OverloadAnalyzer, OverloadStatus, PeriodBucket,
    PeriodType,
};
use pierre_strength::models::SessionRecord;

fn analyzer() -> OverloadAnalyzer {
    OverloadAnalyzer::with_config(OverloadConfig::default())
}

fn weekly_buckets(volumes: &[f64]) -> Vec<PeriodBucket> {
    let first_monday = date(2026, 9, 7);
    volumes
        .iter()
        .enumerate()
        .map(|(week, &volume)| {
            let start = first_monday
                .checked_add_days(Days::new(week as u64 * 7))
                .unwrap();
            PeriodBucket {
                period_key: period_key(start, PeriodType::Week),
                period_start: start,
                period_end: end_of_period(start, PeriodType::Week),
                aggregated_value: volume,
                record_count: 1,
            }
        })
        .collect()
}

fn statuses(volumes: &[f64]) -> Vec<OverloadStatus> {
    analyzer()
        .classify_progressive_overload(&weekly_buckets(volumes))
        .into_iter()
        .map(|assessment| assessment.status)
        .collect()
}

#[test]
fn test_week_over_week_classification() {
    assert_eq!(
        statuses(&[1000.0, 1050.0, 1060.0, 1000.0, 1200.0]),
        vec![
            OverloadStatus::Baseline,
            OverloadStatus::Progressing,
            OverloadStatus::Maintaining,
            OverloadStatus::Regressing,
            OverloadStatus::Excessive,
        ]
    );
}

#[test]
fn test_zero_volume_period_resets_baseline() {
    assert_eq!(
        statuses(&[1000.0, 0.0, 800.0, 900.0]),
        vec![
            OverloadStatus::Baseline,
            OverloadStatus::Regressing,
            OverloadStatus::Baseline,
            OverloadStatus::Excessive,
        ]
    );
}

#[test]
fn test_change_percent_reported() {
    let assessments = analyzer().classify_progressive_overload(&weekly_buckets(&[800.0, 840.0]));

    assert!(assessments[0].change_percent.is_none());
    assert_close(assessments[1].change_percent.unwrap(), 5.0);
    assert_eq!(assessments[1].period_key, "2026-W38");
    assert_close(assessments[1].volume, 840.0);
}

#[test]
fn test_threshold_edges_are_inclusive_of_maintaining() {
    let analyzer = analyzer();
    assert_eq!(analyzer.classify_change(2.5), OverloadStatus::Maintaining);
    assert_eq!(analyzer.classify_change(-2.5), OverloadStatus::Maintaining);
    assert_eq!(analyzer.classify_change(10.0), OverloadStatus::Progressing);
    assert_eq!(analyzer.classify_change(10.5), OverloadStatus::Excessive);
}

#[test]
fn test_classification_over_grouped_sessions() {
    let records = vec![
        session(date(2026, 10, 5), "Squat", &[(100.0, 10)]),
        session(date(2026, 10, 12), "Squat", &[(105.0, 10)]),
    ];
    let buckets = group_by_period(&records, PeriodType::Week, SessionRecord::volume);

    let assessments = analyzer().classify_progressive_overload(&buckets);
    assert_eq!(assessments.len(), 2);
    assert_eq!(assessments[1].status, OverloadStatus::Progressing);
    assert!(analyzer().classify_progressive_overload(&[]).is_empty());
}
