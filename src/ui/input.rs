use crate::rates::today;
use crate::ui::app::{App, Focus};
use crate::ui::dropdown::DropdownIntent;
use crate::ui::picker::PickerIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.picker().is_open() {
        handle_picker_key(app, key);
        return;
    }

    if app.dropdown().is_open() {
        handle_dropdown_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => match app.focus() {
            Focus::Date => app.open_date_picker(),
            Focus::Currency => app.open_currency_dropdown(),
            Focus::Table => {}
        },
        KeyCode::Char('d') => app.open_date_picker(),
        KeyCode::Char('c') => app.open_currency_dropdown(),
        KeyCode::Up if app.focus() == Focus::Table => app.scroll_table(-1),
        KeyCode::Down if app.focus() == Focus::Table => app.scroll_table(1),
        KeyCode::PageUp if app.focus() == Focus::Table => app.scroll_page(-1),
        KeyCode::PageDown if app.focus() == Focus::Table => app.scroll_page(1),
        _ => {}
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Left => PickerIntent::MoveDays { days: -1 },
        KeyCode::Right => PickerIntent::MoveDays { days: 1 },
        KeyCode::Up => PickerIntent::MoveDays { days: -7 },
        KeyCode::Down => PickerIntent::MoveDays { days: 7 },
        KeyCode::PageUp => PickerIntent::MoveMonths { months: -1 },
        KeyCode::PageDown => PickerIntent::MoveMonths { months: 1 },
        KeyCode::Char('t') => PickerIntent::JumpTo { date: today() },
        KeyCode::Esc => PickerIntent::Close,
        KeyCode::Enter => {
            app.confirm_date();
            return;
        }
        _ => return,
    };
    app.dispatch_picker(intent);
}

fn handle_dropdown_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Up => DropdownIntent::Move { delta: -1 },
        KeyCode::Down => DropdownIntent::Move { delta: 1 },
        KeyCode::Esc => DropdownIntent::Close,
        KeyCode::Enter => {
            app.confirm_currency();
            return;
        }
        _ => return,
    };
    app.dispatch_dropdown(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
