mod common;

use common::{make_app, ymd};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratesview::rates::{CurrencyRow, ALL_RATES_OPTION};
use ratesview::ui::app::{Focus, UiCommand};
use ratesview::ui::input::handle_key;
use ratesview::ui::rates::RatesIntent;
use tokio::sync::mpsc;

fn press(app: &mut ratesview::ui::app::App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::empty()));
}

#[test]
fn choosing_eur_from_dropdown_filters_grid() {
    let mut app = make_app();

    press(&mut app, KeyCode::Char('c'));
    assert!(app.dropdown().is_open());
    assert_eq!(app.dropdown().highlighted_option(), Some(ALL_RATES_OPTION));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert!(!app.dropdown().is_open());
    assert_eq!(app.rates().selected_currency_code, "EUR");
    assert_eq!(app.rates().grid_data, vec![CurrencyRow::new("Germany", "EUR", 0.9)]);
    assert_eq!(app.focus(), Focus::Currency);
}

#[test]
fn escape_closes_dropdown_without_filtering() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Esc);

    assert!(!app.dropdown().is_open());
    assert_eq!(app.rates().selected_currency_code, ALL_RATES_OPTION);
    assert_eq!(app.rates().grid_data.len(), 2);
}

#[test]
fn picking_a_date_requests_fetch_only_on_enter() {
    let mut app = make_app();
    let (tx, mut rx) = mpsc::channel(4);
    app.set_command_sender(tx);

    press(&mut app, KeyCode::Enter);
    assert!(app.picker().is_open());
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::PageDown);
    assert!(rx.try_recv().is_err());

    press(&mut app, KeyCode::Enter);
    assert!(!app.picker().is_open());
    assert_eq!(
        rx.try_recv().unwrap(),
        UiCommand::FetchRates {
            date: Some(ymd(2024, 1, 31))
        }
    );
    // The committed date only changes once the fetch dispatches it.
    assert_eq!(app.rates().selected_date, ymd(2024, 1, 1));
}

#[test]
fn escape_cancels_date_pick() {
    let mut app = make_app();
    let (tx, mut rx) = mpsc::channel(4);
    app.set_command_sender(tx);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Esc);

    assert!(!app.picker().is_open());
    assert!(rx.try_recv().is_err());
}

#[test]
fn picker_swallows_quit_key() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn ctrl_q_quits_from_anywhere() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('c'));
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn key_release_is_ignored() {
    let mut app = make_app();
    let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert!(!app.should_quit());
}

#[test]
fn fetch_results_drive_loading_view() {
    let mut app = make_app();
    app.dispatch_rates(RatesIntent::set_is_loading(true));
    assert!(!app.rates().shows_table());

    app.dispatch_rates(RatesIntent::set_table_data(common::jpy_rows()));
    app.dispatch_rates(RatesIntent::set_is_loading(false));
    assert!(app.rates().shows_table());
    assert_eq!(app.rates().grid_data, common::jpy_rows());
}

#[test]
fn tab_moves_focus_to_table_for_scrolling() {
    let mut app = make_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Table);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::Currency);
}
