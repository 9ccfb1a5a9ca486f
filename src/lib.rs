//! Terminal viewer for historical currency exchange rates.
//!
//! Pick a date, the rates for that day are fetched from the backend; pick a
//! currency, the held table is filtered locally.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod rates;
pub mod source;
pub mod ui;
