use chrono::{Duration, Months, NaiveDate};

use crate::ui::mvi::Reducer;

use super::intent::PickerIntent;
use super::state::DatePickerState;

pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = DatePickerState;
    type Intent = PickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PickerIntent::Open { date } => DatePickerState::Open { cursor: date },

            PickerIntent::MoveDays { days } => match state {
                DatePickerState::Open { cursor } => DatePickerState::Open {
                    cursor: cursor.checked_add_signed(Duration::days(days)).unwrap_or(cursor),
                },
                other => other,
            },

            PickerIntent::MoveMonths { months } => match state {
                DatePickerState::Open { cursor } => DatePickerState::Open {
                    cursor: shift_months(cursor, months),
                },
                other => other,
            },

            PickerIntent::JumpTo { date } => match state {
                DatePickerState::Open { .. } => DatePickerState::Open { cursor: date },
                other => other,
            },

            PickerIntent::Close => DatePickerState::Closed,
        }
    }
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}
