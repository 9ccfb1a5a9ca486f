//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_rates;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use ratesview::rates::{CurrencyRow, InitialSnapshot};
use ratesview::source::{RateSource, SourceError};
use ratesview::ui::app::App;
use ratesview::ui::rates::{RatesStore, RatesViewState};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// USA/USD 1.0 and Germany/EUR 0.9.
pub fn usd_eur_rows() -> Vec<CurrencyRow> {
    vec![
        CurrencyRow::new("USA", "USD", 1.0),
        CurrencyRow::new("Germany", "EUR", 0.9),
    ]
}

pub fn jpy_rows() -> Vec<CurrencyRow> {
    vec![CurrencyRow::new("Japan", "JPY", 150.0)]
}

pub fn store_with(rows: Vec<CurrencyRow>) -> RatesStore {
    RatesStore::new(InitialSnapshot { table_data: rows }, ymd(2024, 1, 1))
}

pub fn make_app() -> App {
    App::new(store_with(usd_eur_rows()))
}

pub fn shared_store(rows: Vec<CurrencyRow>) -> Arc<Mutex<RatesStore>> {
    Arc::new(Mutex::new(store_with(rows)))
}

pub fn snapshot_of(store: &Mutex<RatesStore>) -> RatesViewState {
    store.lock().state().clone()
}

/// In-memory source keyed by `dd.MM.yyyy`; unknown dates fail.
#[derive(Default)]
pub struct StaticSource {
    tables: HashMap<String, (Vec<CurrencyRow>, Duration)>,
    calls: Mutex<Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, date: &str, rows: Vec<CurrencyRow>) -> Self {
        self.tables.insert(date.to_string(), (rows, Duration::ZERO));
        self
    }

    /// Like `with_table`, but the response takes `delay` to arrive.
    pub fn with_slow_table(mut self, date: &str, rows: Vec<CurrencyRow>, delay: Duration) -> Self {
        self.tables.insert(date.to_string(), (rows, delay));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl RateSource for StaticSource {
    async fn table_data(&self, date: &str) -> Result<Vec<CurrencyRow>, SourceError> {
        self.calls.lock().push(date.to_string());
        let Some((rows, delay)) = self.tables.get(date).cloned() else {
            return Err(SourceError::Other(format!("no rates for {}", date)));
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(rows)
    }
}

/// Poll until `predicate` holds or `timeout` elapses.
pub async fn wait_until<F: Fn() -> bool>(predicate: F, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if predicate() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    predicate()
}
