//! Reducer for the rates screen.

use crate::rates::filter_rows;
use crate::ui::mvi::Reducer;

use super::intent::RatesIntent;
use super::state::RatesViewState;

/// Reducer for rates view state transitions.
pub struct RatesReducer;

impl Reducer for RatesReducer {
    type State = RatesViewState;
    type Intent = RatesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RatesIntent::SetCurrencyCode { code } => RatesViewState {
                grid_data: filter_rows(&state.table_data, &code),
                selected_currency_code: code,
                ..state
            },

            RatesIntent::SetSelectedDate { date } => RatesViewState {
                selected_date: date,
                ..state
            },

            RatesIntent::SetTableData { rows } => RatesViewState {
                grid_data: filter_rows(&rows, &state.selected_currency_code),
                table_data: rows,
                ..state
            },

            RatesIntent::SetIsLoading { flag } => RatesViewState {
                is_loading: flag,
                ..state
            },

            // Never cleared by any other intent; only overwritten.
            RatesIntent::SetError { message } => RatesViewState {
                error: message,
                ..state
            },
        }
    }
}
