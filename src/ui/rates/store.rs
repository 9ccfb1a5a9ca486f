//! View state container for the rates screen.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;

use crate::rates::InitialSnapshot;
use crate::ui::mvi::Reducer;

use super::intent::RatesIntent;
use super::reducer::RatesReducer;
use super::state::RatesViewState;

/// Something that accepts rates intents.
///
/// The UI event channel implements this so that background fetches can
/// dispatch into the event loop; the store implements it directly for tests
/// and headless use.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, intent: RatesIntent);
}

/// Holds the current [`RatesViewState`]; all mutation goes through
/// [`RatesStore::dispatch`].
#[derive(Debug)]
pub struct RatesStore {
    state: RatesViewState,
}

impl RatesStore {
    /// Create the store from the startup snapshot.
    pub fn new(snapshot: InitialSnapshot, selected_date: NaiveDate) -> Self {
        Self {
            state: RatesViewState::new(snapshot.table_data, selected_date),
        }
    }

    pub fn state(&self) -> &RatesViewState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: RatesIntent) {
        self.state = RatesReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

impl Dispatch for Mutex<RatesStore> {
    fn dispatch(&self, intent: RatesIntent) {
        self.lock().dispatch(intent);
    }
}

impl<T: Dispatch + ?Sized> Dispatch for Arc<T> {
    fn dispatch(&self, intent: RatesIntent) {
        (**self).dispatch(intent);
    }
}
