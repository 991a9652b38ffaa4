//! Error handling for the launcher

use thiserror::Error;

/// Main error type for the launcher
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    ConfigError(#[from] serde_json::Error),

    #[error("Failed to load window icon: {0}")]
    IconError(#[from] image::ImageError),

    #[error("Application runtime failed: {0}")]
    RuntimeError(String),

    #[error("Failed to show notification: {0}")]
    NotificationError(String),

    #[error("Log sink unavailable: {0}")]
    LogSinkError(String),
}
