// ABOUTME: Integration tests for training streak detection
// ABOUTME: Covers the backward scan from today, rest-day tolerance, and gapped histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Days, NaiveDate};
use common::{date, session};
use pierre_strength::intelligence::config::StreakConfig;
use pierre_strength::intelligence::{detect_streak, StreakPolicy, StreakState};

fn today() -> NaiveDate {
    date(2026, 10, 17)
}

fn days_ago(offsets: &[u64]) -> Vec<NaiveDate> {
    offsets
        .iter()
        .map(|&offset| today().checked_sub_days(Days::new(offset)).unwrap())
        .collect()
}

fn state(current_streak: u32, longest_streak: u32) -> StreakState {
    StreakState {
        current_streak,
        longest_streak,
    }
}

#[test]
fn test_three_consecutive_days_ending_today() {
    let streak = detect_streak(&days_ago(&[0, 1, 2]), today(), StreakPolicy::strict());
    assert_eq!(streak, state(3, 3));
}

#[test]
fn test_gap_splits_current_from_historical_run() {
    // today..today-2, then a gap at today-3/today-4, then today-5..today-10
    let dates = days_ago(&[0, 1, 2, 5, 6, 7, 8, 9, 10]);
    let streak = detect_streak(&dates, today(), StreakPolicy::strict());

    assert_eq!(streak, state(3, 6));
}

#[test]
fn test_streak_broken_before_today_has_no_current() {
    let dates = days_ago(&[2, 3, 4, 5]);
    let streak = detect_streak(&dates, today(), StreakPolicy::strict());

    assert_eq!(streak, state(0, 4));
}

#[test]
fn test_rest_days_within_tolerance_keep_streak() {
    // Two missed days between runs are tolerated; missed days do not count
    let dates = days_ago(&[0, 1, 4, 5]);
    let streak = detect_streak(&dates, today(), StreakPolicy::with_rest_days(2));

    assert_eq!(streak, state(4, 4));
}

#[test]
fn test_rest_days_beyond_tolerance_break_streak() {
    let dates = days_ago(&[0, 1, 5, 6, 7]);
    let streak = detect_streak(&dates, today(), StreakPolicy::with_rest_days(2));

    assert_eq!(streak, state(2, 3));
}

#[test]
fn test_rest_day_tolerance_reaches_today() {
    // Nothing logged today or yesterday yet, but within tolerance
    let dates = days_ago(&[2, 3]);
    let streak = detect_streak(&dates, today(), StreakPolicy::with_rest_days(2));

    assert_eq!(streak, state(2, 2));
}

#[test]
fn test_rest_days_ignored_when_not_allowed() {
    let policy = StreakPolicy {
        allow_rest_days: false,
        max_rest_days_per_week: 3,
    };
    let streak = detect_streak(&days_ago(&[0, 2]), today(), policy);

    assert_eq!(streak, state(1, 1));
}

#[test]
fn test_duplicates_and_future_dates() {
    let mut dates = days_ago(&[0, 0, 1, 1]);
    dates.push(today().checked_add_days(Days::new(3)).unwrap());
    let streak = detect_streak(&dates, today(), StreakPolicy::strict());

    assert_eq!(streak, state(2, 2));
}

#[test]
fn test_empty_history() {
    let dates: Vec<NaiveDate> = Vec::new();
    assert_eq!(
        detect_streak(&dates, today(), StreakPolicy::strict()),
        StreakState::default()
    );
}

#[test]
fn test_sessions_are_scanned_by_day() {
    let records = vec![
        session(date(2026, 10, 17), "Squat", &[(100.0, 5)]),
        session(date(2026, 10, 16), "Bench", &[(60.0, 8)]),
        session(date(2026, 10, 16), "Row", &[(60.0, 8)]),
    ];
    let streak = detect_streak(&records, today(), StreakPolicy::strict());

    assert_eq!(streak, state(2, 2));
}

#[test]
fn test_policy_from_config() {
    let config = StreakConfig {
        allow_rest_days: true,
        max_rest_days_per_week: 1,
    };
    assert_eq!(StreakPolicy::from(&config), StreakPolicy::with_rest_days(1));
}
