//! GUI module

pub mod icon;
pub mod notice;
pub mod shell;

// Re-export for convenience
pub use notice::DialogNotifier;
pub use shell::{Fault, ShellApp, ShellRuntime};
