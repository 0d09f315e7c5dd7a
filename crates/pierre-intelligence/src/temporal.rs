// ABOUTME: Calendar period arithmetic and period bucketing for dated training records
// ABOUTME: ISO week numbering, Monday-anchored weeks, month boundaries, and sparse period sums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Temporal aggregation
//!
//! Weeks start on Monday regardless of locale: a Sunday belongs to the week that
//! began six days earlier. Buckets are only produced for periods that contain at
//! least one record; callers needing a dense timeline fill the gaps themselves.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::SessionRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Anything that falls on a calendar day
pub trait Dated {
    /// Calendar day of the record
    fn day(&self) -> NaiveDate;
}

impl Dated for SessionRecord {
    fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

impl Dated for NaiveDate {
    fn day(&self) -> NaiveDate {
        *self
    }
}

/// Aggregation period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    /// Monday-anchored calendar week
    Week,
    /// Calendar month
    Month,
}

impl PeriodType {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = AppError;

    /// Unrecognised names are a caller defect and fail loudly
    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(AppError::invalid_input(format!(
                "Unknown period type '{other}': expected 'week' or 'month'"
            ))),
        }
    }
}

/// Aggregated values for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBucket {
    /// `2026-W42` for weeks (ISO week-year), `2026-10` for months
    pub period_key: String,
    /// First day of the period
    pub period_start: NaiveDate,
    /// Last day of the period
    pub period_end: NaiveDate,
    /// Sum of the extracted value over the period's records
    pub aggregated_value: f64,
    /// Number of records in the period
    pub record_count: usize,
}

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First day included
    pub start: NaiveDate,
    /// Last day included
    pub end: NaiveDate,
}

impl DateWindow {
    /// Create a window covering `start..=end`
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The period of the given type containing `date`
    #[must_use]
    pub fn period_containing(date: NaiveDate, period: PeriodType) -> Self {
        let start = start_of_period(date, period);
        Self {
            start,
            end: end_of_period(start, period),
        }
    }

    /// Whether `date` lies inside the window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Records from `records` whose day falls inside the window
    pub fn filter<'a, T: Dated>(&self, records: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        let window = *self;
        records
            .iter()
            .filter(move |record| window.contains(record.day()))
    }
}

/// ISO-8601 week number (1-53)
///
/// Dates near the turn of the year can belong to week 52/53 of the previous
/// ISO year or week 1 of the next.
#[must_use]
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Monday of the week containing `date`
#[must_use]
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week_on(date, Weekday::Mon)
}

/// First day of the week containing `date` for weeks beginning on `week_start`
#[must_use]
pub fn start_of_week_on(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset =
        (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// First day of the month containing `date`
#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the period containing `date`
#[must_use]
pub fn start_of_period(date: NaiveDate, period: PeriodType) -> NaiveDate {
    match period {
        PeriodType::Week => start_of_week(date),
        PeriodType::Month => start_of_month(date),
    }
}

/// Last day of the period starting at `period_start`
#[must_use]
pub fn end_of_period(period_start: NaiveDate, period: PeriodType) -> NaiveDate {
    match period {
        PeriodType::Week => period_start
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX),
        PeriodType::Month => period_start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX),
    }
}

/// Stable string identifier of the period containing `date`
#[must_use]
pub fn period_key(date: NaiveDate, period: PeriodType) -> String {
    match period {
        PeriodType::Week => {
            let iso = date.iso_week();
            format!("{}-W{:02}", iso.year(), iso.week())
        }
        PeriodType::Month => format!("{}-{:02}", date.year(), date.month()),
    }
}

/// Sum `value_of` per period, ascending by period start
///
/// Only periods containing at least one record appear in the output.
pub fn group_by_period<T, F>(records: &[T], period: PeriodType, value_of: F) -> Vec<PeriodBucket>
where
    T: Dated,
    F: Fn(&T) -> f64,
{
    let mut totals: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = totals
            .entry(start_of_period(record.day(), period))
            .or_insert((0.0, 0));
        entry.0 += value_of(record);
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(period_start, (aggregated_value, record_count))| PeriodBucket {
            period_key: period_key(period_start, period),
            period_start,
            period_end: end_of_period(period_start, period),
            aggregated_value,
            record_count,
        })
        .collect()
}
