// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Format accepted by an HTML `datetime-local` input.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Human-readable walk time in the community's local time,
/// e.g. "Sun, May 4, 2025, 12:10 PM".
pub fn format_display(date: DateTime<Utc>, offset: FixedOffset) -> String {
    date.with_timezone(&offset)
        .format("%a, %B %-d, %Y, %-I:%M %p")
        .to_string()
}

/// Render an instant as a `datetime-local` value in the community offset.
pub fn format_datetime_local(date: DateTime<Utc>, offset: FixedOffset) -> String {
    date.with_timezone(&offset)
        .format(DATETIME_LOCAL_FORMAT)
        .to_string()
}

/// Parse a `datetime-local` value (`YYYY-MM-DDTHH:MM`, seconds optional)
/// as local time in `offset`.
pub fn parse_datetime_local(raw: &str, offset: FixedOffset) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let naive = NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sgt() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    #[test]
    fn test_display_matches_en_us_long_form() {
        let date = Utc.with_ymd_and_hms(2025, 5, 4, 4, 10, 0).unwrap();
        assert_eq!(format_display(date, sgt()), "Sun, May 4, 2025, 12:10 PM");

        let morning = Utc.with_ymd_and_hms(2025, 5, 2, 2, 0, 0).unwrap();
        assert_eq!(format_display(morning, sgt()), "Fri, May 2, 2025, 10:00 AM");
    }

    #[test]
    fn test_parse_datetime_local_uses_offset() {
        let parsed = parse_datetime_local("2025-05-04T16:30", sgt()).unwrap();
        assert_eq!(format_utc_rfc3339(parsed), "2025-05-04T08:30:00Z");

        let with_seconds = parse_datetime_local("2025-05-04T16:30:00", sgt()).unwrap();
        assert_eq!(parsed, with_seconds);
    }

    #[test]
    fn test_parse_datetime_local_rejects_garbage() {
        assert!(parse_datetime_local("tomorrow", sgt()).is_none());
        assert!(parse_datetime_local("2025-13-01T10:00", sgt()).is_none());
        assert!(parse_datetime_local("", sgt()).is_none());
    }

    #[test]
    fn test_datetime_local_round_trip() {
        let date = Utc.with_ymd_and_hms(2025, 5, 4, 8, 30, 0).unwrap();
        let local = format_datetime_local(date, sgt());
        assert_eq!(local, "2025-05-04T16:30");
        assert_eq!(parse_datetime_local(&local, sgt()), Some(date));
    }
}
