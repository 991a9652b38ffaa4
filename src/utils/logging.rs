//! Logging setup
//!
//! Everything goes to the console and to the live log file. The log file is
//! what gets archived when the application does not shut down cleanly, so
//! panics are routed through `tracing` as well.

use crate::utils::config::LauncherSettings;
use crate::utils::error::LauncherError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Truncate the log file, write the banner and return an append handle.
///
/// Both the tracing writer and the fatal logger append to the same file, so
/// neither handle may keep its own write offset.
pub fn open_log_file(path: &Path, settings: &LauncherSettings) -> Result<File, LauncherError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(path)?;
    write!(
        file,
        "**** {} log\n**** produced by version '{}'\n**** time is {}\n\n",
        settings.app_name,
        env!("CARGO_PKG_VERSION"),
        chrono::Local::now().format("%d.%m.%Y %H:%M:%S%.3f"),
    )?;
    drop(file);

    Ok(OpenOptions::new().append(true).open(path)?)
}

/// Initialize logging to the console and, when it can be opened, the log file
pub fn init_logging(settings: &LauncherSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer();
    let log_path = settings.log_file();

    match open_log_file(&log_path, settings) {
        Ok(file) => {
            let file_layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(file_layer)
                .try_init()
                .ok();
            info!("Logging to {:?}", log_path);
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .try_init()
                .ok();
            warn!("Log file {:?} unavailable, logging to console only: {}", log_path, e);
        }
    }
}

/// Route panic messages into the log before the runtime unwinds
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        error!(target: "panic", "{}\n{}", info, backtrace);
    }));
}
