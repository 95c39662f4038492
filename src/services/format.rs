// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Human-readable rendering of timestamps and durations.

use chrono::NaiveDateTime;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Elapsed time between `start` and `end`, rounded to the nearest minute.
///
/// Renders `"1h 30m"`, `"2h"` or `"45m"`. A negative interval is clamped to
/// zero and renders `"0m"`.
pub fn format_duration(start: NaiveDateTime, end: NaiveDateTime) -> String {
    let millis = (end - start).num_milliseconds().max(0);
    let total_minutes = (millis + MILLIS_PER_MINUTE / 2) / MILLIS_PER_MINUTE;

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// `"Sun 6/2 9:05am"`, or `"Sun 6/2 9:05am - 10:00am"` when `end` is given.
pub fn format_day_time_range(start: NaiveDateTime, end: Option<NaiveDateTime>) -> String {
    let head = start.format("%a %-m/%-d %-I:%M%P").to_string();
    match end {
        Some(end) => format!("{} - {}", head, end.format("%-I:%M%P")),
        None => head,
    }
}

/// Long form with abbreviated month, e.g. `"Jun 2, 2024, 9:05 AM"`.
pub fn format_date_time(date: NaiveDateTime) -> String {
    date.format("%b %-d, %Y, %-I:%M %p").to_string()
}
