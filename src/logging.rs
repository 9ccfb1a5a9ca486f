use std::fs::{self, File, OpenOptions};
use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global tracing subscriber writing to the configured log file.
///
/// `RUST_LOG` wins over `config.level`. The terminal belongs to the UI, so
/// nothing is written to stdout/stderr.
pub fn init_tracing(config: &LoggingConfig) -> std::io::Result<()> {
    let file = open_log_file(&config.file_path())?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
