use serde::{Deserialize, Serialize};

/// One currency's exchange rate on the selected date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRow {
    /// Country name (e.g., "Germany").
    pub country: String,
    /// ISO currency code (e.g., "EUR").
    pub code: String,
    pub rate: f64,
}

impl CurrencyRow {
    pub fn new(country: impl Into<String>, code: impl Into<String>, rate: f64) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            rate,
        }
    }
}
