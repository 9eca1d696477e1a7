// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Week-boundary math and date/time formatting helpers.

use chrono::{DateTime, Datelike, SecondsFormat, Timelike, Utc};

const SECS_PER_DAY: i64 = 86_400;

/// Decomposed calendar fields for a timestamp, in the same time reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFields {
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockFields {
    /// Extract the fields from a UTC datetime.
    pub fn from_datetime(date: DateTime<Utc>) -> Self {
        Self {
            weekday: date.weekday().num_days_from_sunday(),
            hour: date.hour(),
            minute: date.minute(),
            second: date.second(),
        }
    }
}

/// Unix timestamp of the most recent Monday 00:00:00 at or before `now`.
///
/// No timezone conversion happens here: the boundary is in whatever reference
/// the calendar fields were taken in.
pub fn start_of_current_week(now: i64, weekday: u32, hour: u32, minute: u32, second: u32) -> i64 {
    let days_since_monday = i64::from((weekday + 6) % 7);
    now - days_since_monday * SECS_PER_DAY
        - i64::from(hour) * 3600
        - i64::from(minute) * 60
        - i64::from(second)
}

/// Week boundary for a UTC datetime.
pub fn week_start_for(date: DateTime<Utc>) -> i64 {
    let fields = ClockFields::from_datetime(date);
    start_of_current_week(
        date.timestamp(),
        fields.weekday,
        fields.hour,
        fields.minute,
        fields.second,
    )
}

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a Unix timestamp as RFC3339, or the raw number if out of range.
pub fn format_unix_rfc3339(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(format_utc_rfc3339)
        .unwrap_or_else(|| timestamp.to_string())
}
