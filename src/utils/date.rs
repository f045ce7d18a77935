//! Date utility functions
//!
//! This module provides functions for parsing date strings and rendering them
//! the way the story client displays them: the Russian long form used across
//! all screens (e.g., "15 марта 2024 г.").

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

use crate::constants::INVALID_DATE;

/// Standard date format used throughout the application for stored dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error produced when a date/time string matches none of the accepted formats
#[derive(Debug, Error)]
pub enum DateError {
    #[error("unrecognized date/time string '{0}'")]
    Unrecognized(String),
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),
}

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Parse a date or datetime string in any of the formats the client stores
///
/// Accepted formats, tried in order:
/// - RFC3339 with timezone (e.g., "2024-03-15T14:30:00Z")
/// - ISO 8601 without timezone (e.g., "2024-03-15T14:30:00")
/// - Space-separated (e.g., "2024-03-15 14:30:00")
/// - Date only (e.g., "2024-03-15"), taken as midnight
pub fn parse_date_flexible(input: &str) -> Result<NaiveDateTime, DateError> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, &format!("{DATE_FORMAT}T%H:%M:%S")) {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, &format!("{DATE_FORMAT} %H:%M:%S")) {
        return Ok(dt);
    }
    if let Ok(d) = parse_date(input) {
        return Ok(d.and_time(NaiveTime::MIN));
    }
    Err(DateError::Unrecognized(input.to_string()))
}

/// Format a stored date string in the Russian long form shown to users
///
/// # Arguments
/// * `date_str` - Date or datetime string in any accepted stored format
///
/// # Returns
/// * `String` - e.g. "15 марта 2024 г.", or the invalid-date marker if the
///   input cannot be parsed (this function never fails)
pub fn format_long_date(date_str: &str) -> String {
    match parse_date_flexible(date_str) {
        Ok(dt) => long_date(dt.date()),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Format a stored datetime string in the long form with a time suffix
///
/// Used for save-slot timestamps (e.g., "15 марта 2024 г., 14:30"). Inputs
/// carrying no time of day fall back to the date-only form.
pub fn format_long_datetime(datetime_str: &str) -> String {
    match parse_date_flexible(datetime_str) {
        Ok(dt) => {
            if dt.hour() == 0 && dt.minute() == 0 && dt.second() == 0 {
                long_date(dt.date())
            } else {
                format!("{}, {}", long_date(dt.date()), dt.format("%H:%M"))
            }
        }
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

fn long_date(d: NaiveDate) -> String {
    format!("{} {} {} г.", d.day(), month_name_genitive(d.month()), d.year())
}

/// Get the Russian month name in the genitive case used in long dates
fn month_name_genitive(month: u32) -> &'static str {
    match month {
        1 => "января",
        2 => "февраля",
        3 => "марта",
        4 => "апреля",
        5 => "мая",
        6 => "июня",
        7 => "июля",
        8 => "августа",
        9 => "сентября",
        10 => "октября",
        11 => "ноября",
        12 => "декабря",
        _ => unreachable!("chrono months are 1-12"),
    }
}
