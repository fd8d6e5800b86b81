//! Shared helpers for parsing and ordering record dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a record date into a UTC instant.
///
/// Accepts plain calendar dates (`2024-01-01`, read as UTC midnight), RFC 3339
/// timestamps, and naive date-times which are read as UTC.
#[must_use]
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|n| n.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|n| n.and_utc())
}

/// Sort key placing every parseable date, ascending, before all unparseable ones.
///
/// Used with a stable sort, unparseable dates keep their relative input order.
#[must_use]
pub fn date_sort_key(input: &str) -> (bool, Option<DateTime<Utc>>) {
    let parsed = parse_date(input);
    (parsed.is_none(), parsed)
}

/// Returns true if the date string cannot be parsed.
#[must_use]
pub fn is_unparseable(input: &str) -> bool {
    parse_date(input).is_none()
}
