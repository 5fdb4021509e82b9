//! Timestamp parsing for date filter values.
//!
//! Date filter values are kept as text by the parser and converted here at
//! evaluation time. Values without a timezone are interpreted as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Naive date-time layouts tried after RFC 3339, in order.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a calendar timestamp.
///
/// Accepted forms, most specific first:
///
/// | Form | Example | Instant |
/// |------|---------|---------|
/// | RFC 3339 | `2024-01-01T10:00:00+02:00` | as written |
/// | date-time | `2024-01-01T10:00`, `2024-01-01 10:00:30` | UTC |
/// | date | `2024-01-01` | midnight UTC |
/// | month | `2024-01` | first day, midnight UTC |
/// | year | `2024` | January 1st, midnight UTC |
///
/// Returns `None` for anything else.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return start_of_day(date);
    }

    parse_year_month(value).and_then(start_of_day)
}

/// `YYYY-MM` or `YYYY`.
fn parse_year_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = match value.split_once('-') {
        Some((year, month)) if month.len() == 2 => (year, month.parse::<u32>().ok()?),
        Some(_) => return None,
        None => (value, 1),
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}
