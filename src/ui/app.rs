use crate::rates::currency_options;
use crate::ui::dropdown::{DropdownIntent, DropdownReducer, DropdownState};
use crate::ui::mvi::Reducer;
use crate::ui::picker::{DatePickerState, PickerIntent, PickerReducer};
use crate::ui::rates::{RatesIntent, RatesStore, RatesViewState};
use chrono::NaiveDate;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Date,
    Currency,
    Table,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Date => Focus::Currency,
            Focus::Currency => Focus::Table,
            Focus::Table => Focus::Date,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Date => Focus::Table,
            Focus::Currency => Focus::Date,
            Focus::Table => Focus::Currency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Fetch rates for a date; `None` means today.
    FetchRates { date: Option<NaiveDate> },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Rates view state container (MVI pattern).
    store: RatesStore,
    /// Date picker widget state (MVI pattern).
    picker: DatePickerState,
    /// Currency dropdown widget state (MVI pattern).
    dropdown: DropdownState,
    table_offset: usize,
    page_size: usize,
    spinner_tick: usize,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(store: RatesStore) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Date,
            store,
            picker: DatePickerState::default(),
            dropdown: DropdownState::default(),
            table_offset: 0,
            page_size: 10,
            spinner_tick: 0,
            command_sender: None,
            last_command_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn rates(&self) -> &RatesViewState {
        self.store.state()
    }

    pub fn picker(&self) -> &DatePickerState {
        &self.picker
    }

    pub fn dropdown(&self) -> &DropdownState {
        &self.dropdown
    }

    /// True while the picker or dropdown owns the keyboard.
    pub fn has_open_widget(&self) -> bool {
        self.picker.is_open() || self.dropdown.is_open()
    }

    pub fn table_offset(&self) -> usize {
        self.table_offset
    }

    pub fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn on_tick(&mut self) {
        if self.store.state().is_loading {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    /// `page_size` is the number of grid rows that fit on screen.
    pub fn on_resize(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp_table_offset();
    }

    // ========================================================================
    // Rates view state (MVI pattern)
    // ========================================================================

    /// Apply a rates intent, e.g. one arriving from a background fetch.
    pub fn dispatch_rates(&mut self, intent: RatesIntent) {
        let resets_scroll = matches!(
            intent,
            RatesIntent::SetTableData { .. } | RatesIntent::SetCurrencyCode { .. }
        );
        self.store.dispatch(intent);
        if resets_scroll {
            self.table_offset = 0;
        }
        self.clamp_table_offset();
    }

    /// Ask the runtime to fetch rates for `date`.
    pub fn request_fetch(&mut self, date: Option<NaiveDate>) -> bool {
        self.send_command(UiCommand::FetchRates { date })
    }

    // ========================================================================
    // Date picker (MVI pattern)
    // ========================================================================

    pub fn dispatch_picker(&mut self, intent: PickerIntent) {
        dispatch_mvi!(self, picker, PickerReducer, intent);
    }

    pub fn open_date_picker(&mut self) {
        let date = self.store.state().selected_date;
        self.dispatch_picker(PickerIntent::Open { date });
        self.focus = Focus::Date;
    }

    /// Commit the picker cursor and start a fetch for it.
    pub fn confirm_date(&mut self) {
        let Some(date) = self.picker.cursor() else {
            return;
        };
        self.dispatch_picker(PickerIntent::Close);
        self.request_fetch(Some(date));
    }

    // ========================================================================
    // Currency dropdown (MVI pattern)
    // ========================================================================

    pub fn dispatch_dropdown(&mut self, intent: DropdownIntent) {
        dispatch_mvi!(self, dropdown, DropdownReducer, intent);
    }

    pub fn open_currency_dropdown(&mut self) {
        let state = self.store.state();
        let intent = DropdownIntent::Open {
            options: currency_options(&state.table_data),
            selected: state.selected_currency_code.clone(),
        };
        self.dispatch_dropdown(intent);
        self.focus = Focus::Currency;
    }

    /// Apply the highlighted option as the currency filter.
    pub fn confirm_currency(&mut self) {
        let Some(code) = self.dropdown.highlighted_option().map(str::to_string) else {
            return;
        };
        self.dispatch_dropdown(DropdownIntent::Close);
        self.dispatch_rates(RatesIntent::set_currency_code(code));
    }

    // ========================================================================
    // Table scrolling
    // ========================================================================

    pub fn scroll_table(&mut self, delta: i64) {
        let next = self.table_offset as i64 + delta;
        self.table_offset = next.max(0) as usize;
        self.clamp_table_offset();
    }

    pub fn scroll_page(&mut self, pages: i64) {
        self.scroll_table(pages * self.page_size as i64);
    }

    fn clamp_table_offset(&mut self) {
        let rows = self.store.state().grid_data.len();
        let max_offset = rows.saturating_sub(self.page_size);
        if self.table_offset > max_offset {
            self.table_offset = max_offset;
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "UI command dropped");
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
