//! Launcher: runs the application and handles abnormal termination

pub mod archive;
pub mod engine;
pub mod fatal;
pub mod models;
pub mod traits;

pub use archive::{archive_file_name, archive_log};
pub use engine::Launcher;
pub use fatal::{report_to_stderr, FileFatalLogger};
pub use models::{
    ErrorNotice, ExitFlag, LaunchConfig, LoggingOutcome, Phase, RuntimeFailure, ShutdownReport,
    Termination,
};
pub use traits::{AppRuntime, FatalLogger, Notifier};
