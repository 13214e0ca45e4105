// src/formatting/date.rs
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Formats a timestamp as `<year>年<month>月<day>日`, e.g. `2024年3月5日`.
///
/// The calendar date is taken as written: an RFC 3339 timestamp keeps its
/// own offset, a naive one (as WordPress sends in `date`) is used verbatim.
/// Input that parses as none of these is returned unchanged.
pub fn format_date(timestamp: &str) -> String {
    match parse_calendar_date(timestamp) {
        Some(date) => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
        None => {
            log::debug!("Unparseable date '{}', leaving as-is", timestamp);
            timestamp.to_string()
        }
    }
}

fn parse_calendar_date(timestamp: &str) -> Option<NaiveDate> {
    let timestamp = timestamp.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok())
}
