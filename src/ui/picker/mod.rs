//! Date picker widget (MVI).

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::PickerIntent;
pub use reducer::PickerReducer;
pub use state::DatePickerState;
pub use view::date_picker_widget;
