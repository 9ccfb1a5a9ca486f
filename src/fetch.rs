//! Fetch orchestrator: turns a picked date into a sequence of rates intents.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::rates::{format_date, today};
use crate::source::RateSource;
use crate::ui::app::UiCommand;
use crate::ui::rates::{Dispatch, RatesIntent};

/// The only error text the user ever sees.
pub const FETCH_ERROR_MESSAGE: &str = "Could not retrieve rates";

static REQUEST_SEQ: AtomicU64 = AtomicU64::new(0);

/// Fetch rates for `date` (today when `None`) and dispatch the outcome.
///
/// Dispatches, in order: `SetIsLoading(true)`, `SetSelectedDate`, then
/// `SetTableData` or `SetError`, then `SetIsLoading(false)`. Overlapping
/// calls are not coordinated; whichever resolves last wins.
pub async fn fetch_rates<S, D>(source: &S, date: Option<NaiveDate>, dispatcher: &D)
where
    S: RateSource + ?Sized,
    D: Dispatch + ?Sized,
{
    let date = date.unwrap_or_else(today);
    let date_str = format_date(Some(date));
    let seq = REQUEST_SEQ.fetch_add(1, Ordering::Relaxed) + 1;

    dispatcher.dispatch(RatesIntent::set_is_loading(true));
    dispatcher.dispatch(RatesIntent::set_selected_date(date));

    tracing::info!(seq, date = %date_str, "Fetching rates");
    match source.table_data(&date_str).await {
        Ok(rows) => {
            tracing::info!(seq, date = %date_str, rows = rows.len(), "Rates received");
            dispatcher.dispatch(RatesIntent::set_table_data(rows));
        }
        Err(err) => {
            tracing::warn!(seq, date = %date_str, kind = err.kind(), error = %err, "Rates fetch failed");
            dispatcher.dispatch(RatesIntent::set_error(FETCH_ERROR_MESSAGE));
        }
    }

    dispatcher.dispatch(RatesIntent::set_is_loading(false));
}

/// Serve UI commands until the sender side is dropped.
///
/// Every fetch runs on its own task, so a slow response never blocks a newer
/// request; nothing orders their completions.
pub fn spawn_fetch_worker<D>(
    mut commands: mpsc::Receiver<UiCommand>,
    source: Arc<dyn RateSource>,
    dispatcher: D,
) -> JoinHandle<()>
where
    D: Dispatch + Clone + 'static,
{
    tokio::spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::FetchRates { date } => {
                    let source = Arc::clone(&source);
                    let dispatcher = dispatcher.clone();
                    tokio::spawn(async move {
                        fetch_rates(source.as_ref(), date, &dispatcher).await;
                    });
                }
            }
        }
        tracing::debug!("Fetch worker stopped");
    })
}
