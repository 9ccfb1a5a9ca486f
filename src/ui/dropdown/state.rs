use crate::ui::mvi::UiState;

/// State of the currency dropdown.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open {
        options: Vec<String>,
        highlighted: usize,
    },
}

impl UiState for DropdownState {}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The option under the highlight, if open.
    pub fn highlighted_option(&self) -> Option<&str> {
        match self {
            Self::Open {
                options,
                highlighted,
            } => options.get(*highlighted).map(String::as_str),
            Self::Closed => None,
        }
    }
}
