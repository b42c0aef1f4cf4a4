//! Lenient date parsing for typed extraction.
//!
//! Accepts RFC 3339 timestamps and a fixed list of common human formats.
//! Month-first forms are tried before day-first ones, so `"01/02/2023"` is
//! January 2nd.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Formats carrying a time of day, tried in order after RFC 3339
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%y %I:%M %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only formats, read as midnight
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Errors from [`parse_date`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("Cannot parse an empty date")]
    Empty,

    #[error("Unrecognized date format: {input}")]
    UnrecognizedFormat { input: String },
}

impl From<DateParseError> for crate::Error {
    fn from(err: DateParseError) -> Self {
        crate::Error::Date(err)
    }
}

/// Parses `text` into a naive date-time.
///
/// Offsets in RFC 3339 input are applied, yielding UTC. Date-only input
/// yields midnight.
///
/// ```
/// # use dotdict::date::parse_date;
/// # use chrono::NaiveDate;
/// let parsed = parse_date("Dec 31, 2023").unwrap();
/// assert_eq!(parsed, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap().and_hms_opt(0, 0, 0).unwrap());
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDateTime, DateParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DateParseError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt);
        }
    }

    if let Some(date) = parse_compact(text) {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }

    Err(DateParseError::UnrecognizedFormat {
        input: text.to_string(),
    })
}

/// `YYYYMMDD`
fn parse_compact(text: &str) -> Option<NaiveDate> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = text[..4].parse().ok()?;
    let month = text[4..6].parse().ok()?;
    let day = text[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
