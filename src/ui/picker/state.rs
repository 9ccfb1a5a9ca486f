use chrono::NaiveDate;

use crate::ui::mvi::UiState;

/// State of the date picker widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DatePickerState {
    /// Showing the committed date only.
    #[default]
    Closed,
    /// Browsing; `cursor` is not committed until the user confirms.
    Open { cursor: NaiveDate },
}

impl UiState for DatePickerState {}

impl DatePickerState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn cursor(&self) -> Option<NaiveDate> {
        match self {
            Self::Open { cursor } => Some(*cursor),
            Self::Closed => None,
        }
    }
}
