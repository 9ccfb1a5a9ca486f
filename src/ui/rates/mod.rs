//! Rates screen feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - View state with the derived grid
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `store.rs` - State container and the [`Dispatch`] seam
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod store;
mod view;

pub use intent::RatesIntent;
pub use reducer::RatesReducer;
pub use state::RatesViewState;
pub use store::{Dispatch, RatesStore};
pub use view::{render_rates_table, SPINNER_FRAMES};
