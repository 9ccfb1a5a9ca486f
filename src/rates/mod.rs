//! Exchange rate domain types.
//!
//! Everything in here is pure data or pure functions; no I/O except
//! [`snapshot`], which reads the startup snapshot file.

mod date;
mod filter;
mod model;
mod snapshot;

pub use date::{format_date, parse_date, today, DateParseError, DATE_FORMAT};
pub use filter::{currency_options, filter_rows, ALL_RATES_OPTION};
pub use model::CurrencyRow;
pub use snapshot::{InitialSnapshot, SnapshotError};
