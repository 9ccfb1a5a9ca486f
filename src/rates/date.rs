//! `dd.MM.yyyy` date handling for the rates endpoint.

use chrono::{Local, NaiveDate};
use thiserror::Error;

/// chrono format string for `dd.MM.yyyy`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Error)]
#[error("Invalid date '{input}', expected dd.MM.yyyy")]
pub struct DateParseError {
    pub input: String,
    #[source]
    source: chrono::ParseError,
}

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as `dd.MM.yyyy`. `None` formats today.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.unwrap_or_else(today).format(DATE_FORMAT).to_string()
}

pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| DateParseError {
        input: input.to_string(),
        source,
    })
}
