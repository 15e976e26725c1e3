//! Lenient date parsing
//!
//!     Date lines are free text, so a handful of common spellings are accepted. The text is
//!     normalized first (whitespace collapsed, ordinal suffixes and a standalone "at"
//!     dropped) and then tried against RFC 3339, RFC 2822 and a fixed list of layouts.
//!     Layouts without an offset are read as UTC; date-only layouts land on midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").expect("valid ordinal regex"));
static STANDALONE_AT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+at\s+").expect("valid 'at' regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

// Two-digit years go first: `%Y` would happily read "20" as the year 20.
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M",
    "%m/%d/%y %I:%M %p",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M %p",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M %p",
    "%B %d %Y %H:%M",
    "%B %d, %Y %H:%M",
    "%B %d %Y %I:%M %p",
    "%B %d, %Y %I:%M %p",
    "%d %B %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%A %B %d %Y",
    "%A, %B %d, %Y",
];

/// Interpret the text of a date line. `None` when no known layout matches.
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let normalized = normalize(text);
    let text = normalized.as_str();
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(text) {
        return Some(date.with_timezone(&Utc));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

fn normalize(text: &str) -> String {
    let text = WHITESPACE.replace_all(text.trim(), " ");
    let text = STANDALONE_AT.replace_all(&text, " ");
    ORDINAL.replace_all(&text, "$1").into_owned()
}
