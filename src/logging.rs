//! File-backed tracing setup. The terminal belongs to the UI, so log output
//! never goes to stdout/stderr while the dashboard runs.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Default log file location: `<state or cache dir>/catalog-dash/catalog-dash.log`.
pub fn default_log_path() -> PathBuf {
    let base = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("catalog-dash").join("catalog-dash.log")
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured filter. Returns the log file path.
pub fn init_tracing(config: &LoggingConfig) -> std::io::Result<PathBuf> {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Arc::new(file))
        .init();

    Ok(path)
}
