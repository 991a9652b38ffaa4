//! Utility modules for error handling, configuration and logging

pub mod config;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export for convenience
pub use config::{DeploymentLayout, LauncherSettings, LoadedSettings, SettingsSource};
pub use error::LauncherError;
pub use logging::{init_logging, install_panic_hook};
