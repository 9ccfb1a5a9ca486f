use crate::fetch::spawn_fetch_worker;
use crate::source::RateSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventDispatcher, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::table_page_size;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use chrono::NaiveDate;
use ratatui::layout::Rect;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const COMMAND_QUEUE_SIZE: usize = 16;

/// Run the UI until the user quits.
///
/// Must be called from inside a tokio runtime context; fetches are spawned
/// onto it. `initial_fetch` is set when there was no startup snapshot.
pub fn run(
    mut app: App,
    source: Arc<dyn RateSource>,
    tick_rate: Duration,
    initial_fetch: Option<NaiveDate>,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_SIZE);
    let worker = spawn_fetch_worker(
        command_rx,
        source,
        EventDispatcher::new(events.sender()),
    );
    app.set_command_sender(command_tx);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(table_page_size(Rect::new(0, 0, cols, rows)));
    }
    if let Some(date) = initial_fetch {
        app.request_fetch(Some(date));
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                app.on_resize(table_page_size(Rect::new(0, 0, cols, rows)));
            }
            Ok(AppEvent::Rates(intent)) => app.dispatch_rates(intent),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    worker.abort();
    drop(guard);
    tracing::info!("UI closed");
    Ok(())
}
