//! Date helper functions

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Format a date string like "April 15, 2023"
///
/// Strings that do not parse are returned unchanged.
pub fn format_long(date: &str) -> String {
    format_with(date, "%B %-d, %Y")
}

/// Format a date string like "Apr 15, 2023"
pub fn format_short(date: &str) -> String {
    format_with(date, "%b %-d, %Y")
}

fn format_with(date: &str, format: &str) -> String {
    match parse_date(date) {
        Some(d) => d.format(format).to_string(),
        None => date.to_string(),
    }
}
