//! Logging setup.

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use color_eyre::eyre::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Installs the global `tracing` subscriber, writing to the file at `path`.
///
/// The filter comes from `RUST_LOG` when set and from `default_level` otherwise. Output never goes
/// to stdout or stderr, since those belong to the terminal UI; if the log file cannot be opened
/// the game runs without logs.
///
/// # Errors
///
/// - [`tracing_subscriber::util::TryInitError`] if a global subscriber is already installed.
pub fn init_tracing(path: &Path, default_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .try_init()?;
            tracing::info!(path = %path.display(), "logging initialized");
        }
        Err(_) => tracing_subscriber::registry().with(env_filter).try_init()?,
    }

    Ok(())
}
