use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{CleanError, Result};
use crate::record::RawMatchRecord;

// Fixed precedence: ISO first, then day-first (the source is an Indian-league
// export), then month-first, then named-month and datetime forms.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a free-form date cell into a calendar date. The time-of-day part of
/// datetime-shaped values is dropped.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }
    None
}

/// Normalize the date column for the whole table. Any unparsable row is a
/// hard stop: downstream sorting and range filtering need every date valid.
/// `row` in the error is the 1-based data row.
pub fn normalize_dates(records: &[RawMatchRecord]) -> Result<Vec<NaiveDate>> {
    let mut dates = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let raw = record.date.as_deref().unwrap_or("");
        let Some(date) = parse_flexible(raw) else {
            return Err(CleanError::DateParse {
                row: idx + 1,
                value: raw.to_string(),
            });
        };
        dates.push(date);
    }
    Ok(dates)
}
