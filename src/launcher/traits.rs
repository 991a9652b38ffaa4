//! Collaborators the launcher drives

use crate::launcher::models::{ErrorNotice, LaunchConfig, RuntimeFailure};
use crate::utils::LauncherError;

/// The application runtime
pub trait AppRuntime {
    /// Run the application; blocks until it exits
    fn run(&mut self, config: &LaunchConfig) -> anyhow::Result<()>;

    /// Whether the runtime went through its own normal shutdown path
    fn clean_exit(&self) -> bool;
}

/// Records an unrecoverable failure. May itself fail.
pub trait FatalLogger {
    fn record_fatal(&self, failure: &RuntimeFailure) -> Result<(), LauncherError>;
}

/// Shows the error notification.
///
/// Returns only after the user acknowledged it. Every way of dismissing the
/// notice is the same acknowledgement.
pub trait Notifier {
    fn notify(&self, notice: &ErrorNotice) -> Result<(), LauncherError>;
}
