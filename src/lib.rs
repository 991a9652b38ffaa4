//! forty-five desktop launcher library

pub mod gui;
pub mod launcher;
pub mod utils;

// Re-export main types for easier use
pub use gui::{DialogNotifier, Fault, ShellRuntime};
pub use launcher::{
    AppRuntime, ErrorNotice, FatalLogger, FileFatalLogger, LaunchConfig, Launcher, Notifier,
    RuntimeFailure, Termination,
};
pub use utils::{DeploymentLayout, LauncherError, LauncherSettings};
