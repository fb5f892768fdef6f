// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Display format used by the date columns.
const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Parse an ISO-8601 timestamp, with or without an offset.
///
/// Offset-less values are taken as UTC, which matches how the backend
/// stores them.
pub fn parse_iso(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    None
}

/// Format a timestamp as `dd.MM.yyyy HH:mm`.
pub fn format_display(date: DateTime<Utc>) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Format a raw ISO string for display, degrading to the raw value when it
/// does not parse.
pub fn display_or_raw(raw: &str) -> String {
    match parse_iso(raw) {
        Some(dt) => format_display(dt),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_with_offset() {
        let dt = parse_iso("2024-05-01T10:00:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-05-01T10:00:00+00:00");

        let dt = parse_iso("2024-05-01T10:00:00+03:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-05-01T07:00:00+00:00");
    }

    #[test]
    fn test_parse_iso_without_offset() {
        let dt = parse_iso("2024-05-01T10:00:00").unwrap();
        assert_eq!(format_display(dt), "01.05.2024 10:00");

        let dt = parse_iso("2024-05-01T10:00").unwrap();
        assert_eq!(format_display(dt), "01.05.2024 10:00");
    }

    #[test]
    fn test_parse_iso_rejects_garbage() {
        assert!(parse_iso("").is_none());
        assert!(parse_iso("next tuesday").is_none());
        assert!(parse_iso("2024-13-99T99:99").is_none());
    }

    #[test]
    fn test_display_or_raw_degrades() {
        assert_eq!(
            display_or_raw("2024-05-01T10:00:00Z"),
            "01.05.2024 10:00"
        );
        assert_eq!(display_or_raw("not a date"), "not a date");
    }
}
