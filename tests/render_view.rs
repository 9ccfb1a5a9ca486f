mod common;

use common::make_app;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use ratesview::ui::app::App;
use ratesview::ui::render::draw;
use ratesview::ui::rates::RatesIntent;

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn renders_grid_rows_and_controls() {
    let text = screen_text(&make_app());
    assert!(text.contains("Exchange Rates"));
    assert!(text.contains("01.01.2024"));
    assert!(text.contains("Country"));
    assert!(text.contains("Germany"));
    assert!(text.contains("USD"));
}

#[test]
fn error_replaces_table() {
    let mut app = make_app();
    app.dispatch_rates(RatesIntent::set_error("Could not retrieve rates"));
    let text = screen_text(&app);
    assert!(text.contains("Could not retrieve rates"));
    assert!(!text.contains("Germany"));
}

#[test]
fn loading_shows_spinner_text() {
    let mut app = make_app();
    app.dispatch_rates(RatesIntent::set_is_loading(true));
    let text = screen_text(&app);
    assert!(text.contains("Loading rates"));
    assert!(!text.contains("Germany"));
}

#[test]
fn open_dropdown_lists_codes() {
    let mut app = make_app();
    app.open_currency_dropdown();
    let text = screen_text(&app);
    assert!(text.contains("Currency"));
    assert!(text.contains("ALL"));
    assert!(text.contains("EUR"));
}
