use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use ratesview::config::Config;
use ratesview::logging::init_tracing;
use ratesview::rates::{parse_date, today, InitialSnapshot};
use ratesview::source::{HttpRateSource, RateSource};
use ratesview::ui::app::App;
use ratesview::ui::rates::RatesStore;
use ratesview::ui::runtime;

/// Browse historical exchange rates in the terminal.
#[derive(Debug, Parser)]
#[command(name = "ratesview", version, about)]
struct Cli {
    /// Config file (default: ~/.config/ratesview/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Rates backend base URL, overriding the config file
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Start date as dd.MM.yyyy (default: today)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    date: Option<chrono::NaiveDate>,

    /// JSON snapshot with the initial table; skips the first fetch
    #[arg(long, value_name = "PATH")]
    initial_state: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    if let Some(base_url) = cli.base_url {
        config.source.base_url = base_url;
        config.validate()?;
    }

    init_tracing(&config.logging).context("Failed to open log file")?;
    tracing::info!(config = %config_path.display(), base_url = %config.source.base_url, "Starting ratesview");

    let start_date = cli.date.unwrap_or_else(today);
    let (snapshot, initial_fetch) = match &cli.initial_state {
        Some(path) => (InitialSnapshot::load_from(path)?, None),
        None => (InitialSnapshot::default(), Some(start_date)),
    };
    tracing::info!(rows = snapshot.table_data.len(), fetch_on_start = initial_fetch.is_some(), "Initial state loaded");

    let source: Arc<dyn RateSource> = Arc::new(HttpRateSource::new(&config.source)?);
    let app = App::new(RatesStore::new(snapshot, start_date));

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let _enter = tokio_runtime.enter();

    runtime::run(
        app,
        source,
        Duration::from_millis(config.ui.tick_rate_ms),
        initial_fetch,
    )?;
    Ok(())
}
