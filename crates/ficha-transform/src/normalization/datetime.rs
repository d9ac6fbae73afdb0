//! Date/time parsing for registry date columns.
//!
//! Registry exports mix ISO timestamps with Brazilian day-first dates, so
//! day-first forms are tried before month-first ones. Partial dates resolve
//! to the first day of the period.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use ficha_model::CellValue;

/// Parses a free-text date or timestamp.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    try_parse_datetime(trimmed)
        .or_else(|| try_parse_date(trimmed).map(|d| d.and_time(NaiveTime::MIN)))
        .or_else(|| try_parse_partial(trimmed).map(|d| d.and_time(NaiveTime::MIN)))
}

/// Coerces a date cell to a timestamp no later than `now`.
///
/// Unparsable text, numbers and booleans become null, as does any timestamp
/// strictly after `now`.
pub fn normalize_date(value: &CellValue, now: NaiveDateTime) -> CellValue {
    let parsed = match value {
        CellValue::Timestamp(ts) => Some(*ts),
        CellValue::Text(raw) => parse_timestamp(raw),
        CellValue::Null | CellValue::Bool(_) | CellValue::Number(_) => None,
    };
    match parsed {
        Some(ts) if ts <= now => CellValue::Timestamp(ts),
        _ => CellValue::Null,
    }
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%d/%m/%Y %H:%M:%S", // Brazilian
        "%d/%m/%Y %H:%M",
        "%m/%d/%Y %H:%M:%S", // US
        "%m/%d/%Y %H:%M",
        "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d/%m/%Y",  // Brazilian: 15/01/2024
        "%m/%d/%Y",  // US: 01/15/2024
        "%d-%m-%Y",  // 15-01-2024
        "%d.%m.%Y",  // 15.01.2024
        "%d-%b-%Y",  // 15-Jan-2024
        "%d %b %Y",  // 15 Jan 2024
        "%d %B %Y",  // 15 January 2024
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%Y%m%d",    // Compact: 20240115
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// `YYYY-MM`, `MM/YYYY` and `YYYY`.
fn try_parse_partial(value: &str) -> Option<NaiveDate> {
    if value.len() == 7 && value.as_bytes()[4] == b'-' {
        return NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok();
    }
    if value.len() == 7 && value.as_bytes()[2] == b'/' {
        return NaiveDate::parse_from_str(&format!("01/{value}"), "%d/%m/%Y").ok();
    }
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        let year = value.parse::<i32>().ok()?;
        if (1900..=2100).contains(&year) {
            return NaiveDate::from_ymd_opt(year, 1, 1);
        }
    }
    None
}
