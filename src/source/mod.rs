//! Rate data sources.
//!
//! The UI only depends on [`RateSource`]; [`HttpRateSource`] is the
//! production implementation talking to the rates backend.

mod error;
mod http;

pub use error::SourceError;
pub use http::HttpRateSource;

use async_trait::async_trait;

use crate::rates::CurrencyRow;

/// Fetches the rate table for one date.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// `date` is formatted as `dd.MM.yyyy`.
    async fn table_data(&self, date: &str) -> Result<Vec<CurrencyRow>, SourceError>;
}
