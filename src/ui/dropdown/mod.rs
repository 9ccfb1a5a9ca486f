//! Currency dropdown widget (MVI).

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DropdownIntent;
pub use reducer::DropdownReducer;
pub use state::DropdownState;
pub use view::{currency_field_widget, render_currency_dropdown};
