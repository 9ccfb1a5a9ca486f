//! View state for the rates screen.

use chrono::NaiveDate;

use crate::rates::{filter_rows, today, CurrencyRow, ALL_RATES_OPTION};
use crate::ui::mvi::UiState;

/// Everything the rates screen renders from.
///
/// `grid_data` is derived: it always equals
/// `filter_rows(&table_data, &selected_currency_code)`. Only the reducer
/// writes these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RatesViewState {
    /// Full unfiltered rows for `selected_date`.
    pub table_data: Vec<CurrencyRow>,
    /// `table_data` after the currency filter.
    pub grid_data: Vec<CurrencyRow>,
    /// [`ALL_RATES_OPTION`] or a currency code.
    pub selected_currency_code: String,
    pub selected_date: NaiveDate,
    /// True while a fetch for a new date is outstanding.
    pub is_loading: bool,
    /// Empty when there is no error. Non-empty hides the table.
    pub error: String,
}

impl UiState for RatesViewState {}

impl Default for RatesViewState {
    fn default() -> Self {
        Self::new(Vec::new(), today())
    }
}

impl RatesViewState {
    /// Initial state for `table_data` with no filter applied.
    pub fn new(table_data: Vec<CurrencyRow>, selected_date: NaiveDate) -> Self {
        Self {
            grid_data: table_data.clone(),
            table_data,
            selected_currency_code: ALL_RATES_OPTION.to_string(),
            selected_date,
            is_loading: false,
            error: String::new(),
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Whether the table widget should be drawn at all.
    pub fn shows_table(&self) -> bool {
        !self.is_loading && !self.has_error()
    }

    /// Check that `grid_data` matches its derivation.
    pub fn is_consistent(&self) -> bool {
        self.grid_data == filter_rows(&self.table_data, &self.selected_currency_code)
    }
}
