//! Platform-specific utilities for the launcher
//!
//! This module provides cross-platform lookups for:
//! - The settings file search path
//! - Console attachment for windowed Windows builds

use crate::utils::config::SETTINGS_FILE_NAME;
use std::path::PathBuf;

/// Returns the configuration directory
/// - macOS: ~/Library/Application Support/fortyfive
/// - Windows: %APPDATA%\fortyfive
/// - Linux: ~/.config/fortyfive
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fortyfive"))
}

/// Settings files in lookup order: the working directory first, then the
/// per-user configuration directory.
pub fn settings_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(dir) = config_dir() {
        candidates.push(dir.join(SETTINGS_FILE_NAME));
    }
    candidates
}

/// Attach to the console of the parent process, if any.
///
/// Release builds on Windows use the GUI subsystem and start without a
/// console, so standard error would go nowhere when launched from a terminal.
#[cfg(target_os = "windows")]
pub fn attach_parent_console() {
    use winapi::um::wincon::{AttachConsole, ATTACH_PARENT_PROCESS};

    // SAFETY: AttachConsole takes a plain process id and touches no Rust-owned
    // memory; it fails harmlessly when there is no parent console.
    unsafe {
        AttachConsole(ATTACH_PARENT_PROCESS);
    }
}

#[cfg(not(target_os = "windows"))]
pub fn attach_parent_console() {}
