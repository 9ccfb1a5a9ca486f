use chrono::NaiveDate;

use crate::ui::mvi::Intent;

/// Intents for the date picker.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerIntent {
    /// Open with the cursor on `date`.
    Open { date: NaiveDate },
    /// Move the cursor by whole days (negative = earlier).
    MoveDays { days: i64 },
    /// Move the cursor by calendar months, clamping the day.
    MoveMonths { months: i32 },
    /// Put the cursor on `date` (e.g., today).
    JumpTo { date: NaiveDate },
    Close,
}

impl Intent for PickerIntent {}
