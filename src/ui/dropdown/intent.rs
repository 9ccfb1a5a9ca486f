use crate::ui::mvi::Intent;

/// Intents for the currency dropdown.
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownIntent {
    /// Open with `options`, highlighting `selected` when present.
    Open {
        options: Vec<String>,
        selected: String,
    },
    /// Move the highlight; wraps at both ends.
    Move { delta: i32 },
    Close,
}

impl Intent for DropdownIntent {}
