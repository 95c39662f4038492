// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for timestamp parsing and serialization.
//!
//! Stored records use ISO-8601 local date-times (`2024-06-01T12:00:00`).
//! Values that carry an offset are converted to the server's local wall-clock
//! time, so every timestamp compares on the same axis as `Local::now()`.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Wire format used when writing timestamps back out.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepted layouts for timestamps without an offset.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Debug, thiserror::Error)]
#[error("Invalid timestamp '{0}': expected ISO-8601 date-time")]
pub struct TimestampError(pub String);

/// Parse an ISO-8601 date-time into server-local wall-clock time.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    parse_timestamp_in(raw, &Local)
}

/// Parse an ISO-8601 date-time into wall-clock time in `zone`.
///
/// Values without an offset are already wall-clock time and pass through
/// unchanged; values with an offset are shifted into `zone`.
pub fn parse_timestamp_in<Tz: TimeZone>(
    raw: &str,
    zone: &Tz,
) -> Result<NaiveDateTime, TimestampError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(zone).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| TimestampError(raw.to_string()))
}

/// Format a timestamp in the stored wire format.
pub fn format_timestamp(date: NaiveDateTime) -> String {
    date.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde adapter for required timestamp fields.
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_timestamp(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }

    /// Serde adapter for optional timestamp fields (absent or `null` is `None`).
    pub mod option {
        use chrono::NaiveDateTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDateTime>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => s.serialize_some(&crate::time_utils::format_timestamp(*date)),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<NaiveDateTime>, D::Error> {
            Option::<String>::deserialize(d)?
                .filter(|raw| !raw.trim().is_empty())
                .map(|raw| crate::time_utils::parse_timestamp(&raw))
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}
