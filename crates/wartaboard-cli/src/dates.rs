//! Long date rendering for timestamp columns.

use chrono::{DateTime, Datelike};
use wartaboard::Value;

/// Formats a timestamp cell as `January 5th, 2025`.
///
/// Blank cells stay blank. Anything that is not a timestamp falls back to
/// its text form.
pub fn long_date<R>(value: &Value<'_>, _row: &R) -> String {
    match value {
        Value::Timestamp(ts) => match DateTime::from_timestamp_millis(ts.as_millis()) {
            Some(dt) => format!(
                "{} {}{}, {}",
                dt.format("%B"),
                dt.day(),
                ordinal_suffix(dt.day()),
                dt.year()
            ),
            None => value.to_text().into_owned(),
        },
        _ => value.to_text().into_owned(),
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
