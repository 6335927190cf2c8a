// src/timestamp.rs
//! Conversion of crt.sh table dates to Unix timestamps

use chrono::NaiveDateTime;

/// Appended to a bare `YYYY-MM-DD` date to pin it to midnight UTC
const MIDNIGHT_SUFFIX: &str = "T00:00:00.000Z";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Convert a table date (`YYYY-MM-DD`) to seconds since the Unix epoch.
///
/// Unparseable input yields 0, which is indistinguishable from a real
/// 1970-01-01 date.
pub fn date_to_epoch(date: &str) -> i64 {
    if !is_table_date(date) {
        return 0;
    }

    let stamped = format!("{}{}", date, MIDNIGHT_SUFFIX);
    NaiveDateTime::parse_from_str(&stamped, TIMESTAMP_FORMAT)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(0)
}

/// Exactly `DDDD-DD-DD`: four-digit year, two-digit month and day
fn is_table_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
