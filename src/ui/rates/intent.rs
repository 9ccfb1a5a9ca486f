//! Intents for the rates screen.

use chrono::NaiveDate;

use crate::rates::CurrencyRow;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the rates view state.
#[derive(Debug, Clone, PartialEq)]
pub enum RatesIntent {
    /// User picked a currency in the dropdown.
    SetCurrencyCode { code: String },

    /// A fetch for a new date started.
    SetSelectedDate { date: NaiveDate },

    /// A fetch resolved with rows.
    SetTableData { rows: Vec<CurrencyRow> },

    SetIsLoading { flag: bool },

    /// A fetch failed.
    SetError { message: String },
}

impl Intent for RatesIntent {}

impl RatesIntent {
    pub fn set_currency_code(code: impl Into<String>) -> Self {
        Self::SetCurrencyCode { code: code.into() }
    }

    pub fn set_selected_date(date: NaiveDate) -> Self {
        Self::SetSelectedDate { date }
    }

    pub fn set_table_data(rows: Vec<CurrencyRow>) -> Self {
        Self::SetTableData { rows }
    }

    pub fn set_is_loading(flag: bool) -> Self {
        Self::SetIsLoading { flag }
    }

    pub fn set_error(message: impl Into<String>) -> Self {
        Self::SetError {
            message: message.into(),
        }
    }
}
