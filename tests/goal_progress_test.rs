// ABOUTME: Integration tests for goal progress projection
// ABOUTME: Covers expected progress, status ordering, completion forecasts, pace, and measurement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, date, session};
use pierre_strength::intelligence::config::GoalProgressConfig;
use pierre_strength::intelligence::{
    GoalProgressEngine, GoalStatus, LookupCategorizer, ProgressPoint,
};
use pierre_strength::models::{GoalDefinition, GoalType, SessionRecord};

fn engine() -> GoalProgressEngine {
    GoalProgressEngine::with_config(GoalProgressConfig::default())
}

#[test]
fn test_expected_progress_is_linear_and_clamped() {
    let start = date(2026, 1, 1);
    let deadline = date(2026, 1, 11);

    assert_close(
        GoalProgressEngine::expected_progress_percent(start, deadline, date(2026, 1, 6)),
        50.0,
    );
    assert_close(
        GoalProgressEngine::expected_progress_percent(start, deadline, date(2025, 12, 25)),
        0.0,
    );
    assert_close(
        GoalProgressEngine::expected_progress_percent(start, deadline, date(2026, 2, 1)),
        100.0,
    );
}

#[test]
fn test_expected_progress_with_empty_window() {
    let day = date(2026, 5, 1);
    assert_close(
        GoalProgressEngine::expected_progress_percent(day, day, day),
        100.0,
    );
    assert_close(
        GoalProgressEngine::expected_progress_percent(day, day, date(2026, 4, 30)),
        0.0,
    );
}

#[test]
fn test_status_check_ordering() {
    let engine = engine();

    // 85 >= 80 so the at-risk rule does not apply; 85 > 70 + 10
    assert_eq!(engine.classify_goal_status(85.0, 70.0, 10), GoalStatus::Ahead);
    // Near the deadline and under 80% wins over being ahead of expectation
    assert_eq!(engine.classify_goal_status(75.0, 60.0, 10), GoalStatus::AtRisk);
    assert_eq!(engine.classify_goal_status(75.0, 60.0, 30), GoalStatus::Ahead);
    assert_eq!(
        engine.classify_goal_status(100.0, 20.0, 1),
        GoalStatus::Completed
    );
}

#[test]
fn test_status_band_around_expectation() {
    let engine = engine();

    assert_eq!(engine.classify_goal_status(50.0, 50.0, 30), GoalStatus::OnTrack);
    assert_eq!(engine.classify_goal_status(60.0, 50.0, 30), GoalStatus::OnTrack);
    assert_eq!(engine.classify_goal_status(39.0, 50.0, 30), GoalStatus::Behind);
}

#[test]
fn test_predict_completion_date_extrapolates_average_gap() {
    let history = [
        ProgressPoint::new(date(2026, 1, 1), 100.0),
        ProgressPoint::new(date(2026, 1, 8), 105.0),
        ProgressPoint::new(date(2026, 1, 15), 110.0),
    ];

    let predicted =
        GoalProgressEngine::predict_completion_date(&history, 120.0, date(2026, 1, 15));
    assert_eq!(predicted, Some(date(2026, 1, 29)));
}

#[test]
fn test_predict_completion_date_unordered_input() {
    let history = [
        ProgressPoint::new(date(2026, 1, 15), 110.0),
        ProgressPoint::new(date(2026, 1, 1), 100.0),
        ProgressPoint::new(date(2026, 1, 8), 105.0),
    ];

    let predicted =
        GoalProgressEngine::predict_completion_date(&history, 120.0, date(2026, 1, 15));
    assert_eq!(predicted, Some(date(2026, 1, 29)));
}

#[test]
fn test_predict_completion_date_already_met() {
    let now = date(2026, 3, 1);
    let met = [
        ProgressPoint::new(date(2026, 2, 1), 90.0),
        ProgressPoint::new(date(2026, 2, 8), 121.0),
    ];
    assert_eq!(
        GoalProgressEngine::predict_completion_date(&met, 120.0, now),
        Some(now)
    );

    // The fitted line has already crossed the target even though the last value has not
    let crossed = [
        ProgressPoint::new(date(2026, 2, 1), 100.0),
        ProgressPoint::new(date(2026, 2, 8), 130.0),
        ProgressPoint::new(date(2026, 2, 15), 125.0),
    ];
    assert_eq!(
        GoalProgressEngine::predict_completion_date(&crossed, 126.0, now),
        Some(now)
    );
}

#[test]
fn test_predict_completion_date_without_upward_trend() {
    let now = date(2026, 3, 1);
    let declining = [
        ProgressPoint::new(date(2026, 2, 1), 110.0),
        ProgressPoint::new(date(2026, 2, 8), 105.0),
        ProgressPoint::new(date(2026, 2, 15), 100.0),
    ];
    let flat = [
        ProgressPoint::new(date(2026, 2, 1), 100.0),
        ProgressPoint::new(date(2026, 2, 8), 100.0),
    ];

    assert_eq!(
        GoalProgressEngine::predict_completion_date(&declining, 120.0, now),
        None
    );
    assert_eq!(
        GoalProgressEngine::predict_completion_date(&flat, 120.0, now),
        None
    );
    assert_eq!(
        GoalProgressEngine::predict_completion_date(&flat[..1], 120.0, now),
        None
    );
}

#[test]
fn test_required_pace() {
    let pace = GoalProgressEngine::required_pace(100.0, 130.0, 14);

    assert_close(pace.total, 30.0);
    assert_close(pace.per_day, 30.0 / 14.0);
    assert_close(pace.per_week, 15.0);
}

#[test]
fn test_required_pace_zero_days_is_unguarded() {
    let pace = GoalProgressEngine::required_pace(100.0, 130.0, 0);
    assert!(pace.per_day.is_infinite());
}

#[test]
fn test_track_progress_snapshot() {
    let goal = GoalDefinition::new(
        GoalType::Strength {
            exercise_name: "Squat".into(),
        },
        150.0,
        date(2026, 1, 1),
        date(2026, 3, 2),
    );

    let progress = engine().track_progress(&goal, 84.0, date(2026, 1, 31));
    assert_close(progress.progress_percent, 56.0);
    assert_close(progress.expected_progress_percent, 50.0);
    assert_eq!(progress.days_remaining, 30);
    assert_eq!(progress.status, GoalStatus::OnTrack);
    assert_close(progress.target_value, 150.0);

    let done = engine().track_progress(&goal, 160.0, date(2026, 1, 31));
    assert_close(done.progress_percent, 100.0);
    assert_eq!(done.status, GoalStatus::Completed);
}

fn training_log() -> Vec<SessionRecord> {
    vec![
        session(date(2025, 12, 20), "Squat", &[(200.0, 1)]),
        session(date(2026, 1, 5), "Squat", &[(100.0, 5)]),
        session(date(2026, 1, 20), "squat", &[(120.0, 3)]),
        session(date(2026, 2, 10), "Squat", &[(150.0, 1)]),
    ]
}

fn goal(goal_type: GoalType) -> GoalDefinition {
    GoalDefinition::new(goal_type, 1000.0, date(2026, 1, 1), date(2026, 3, 31))
}

#[test]
fn test_measure_current_value_per_goal_type() {
    let engine = engine();
    let records = training_log();
    let categorizer = LookupCategorizer::new().with_exercise("Squat", ["legs", "glutes"]);
    let now = date(2026, 1, 31);

    let strength = engine
        .measure_current_value(
            &goal(GoalType::Strength {
                exercise_name: "Squat".into(),
            }),
            &records,
            &categorizer,
            now,
        )
        .unwrap();
    assert_close(strength, 132.0);

    let volume = engine
        .measure_current_value(
            &goal(GoalType::Volume {
                category: "legs".into(),
            }),
            &records,
            &categorizer,
            now,
        )
        .unwrap();
    assert_close(volume, 860.0);

    let frequency = engine
        .measure_current_value(&goal(GoalType::Frequency), &records, &categorizer, now)
        .unwrap();
    assert_close(frequency, 2.0);

    let custom = engine.measure_current_value(
        &goal(GoalType::Custom {
            metric: "bodyweight".into(),
        }),
        &records,
        &categorizer,
        now,
    );
    assert!(custom.is_none());
}

#[test]
fn test_measure_strength_goal_without_sessions_is_zero() {
    let categorizer = LookupCategorizer::new();
    let value = engine()
        .measure_current_value(
            &goal(GoalType::Strength {
                exercise_name: "Deadlift".into(),
            }),
            &training_log(),
            &categorizer,
            date(2026, 1, 31),
        )
        .unwrap();
    assert_close(value, 0.0);
}
