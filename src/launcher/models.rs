//! Launcher data types

use std::any::Any;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const ERROR_HEADLINE: &str = "An error was encountered!";

/// Window configuration handed to the runtime. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub foreground_fps: u32,
    pub icon: Option<PathBuf>,
}

/// Shared "clean exit" flag. Starts out clean; the runtime marks it unclean
/// when it shuts itself down because of an unrecoverable error.
#[derive(Debug, Clone)]
pub struct ExitFlag(Arc<AtomicBool>);

impl ExitFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn mark_unclean(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_clean(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for ExitFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// A failure captured while the runtime ran
#[derive(Debug)]
pub enum RuntimeFailure {
    /// `run` returned an error
    Error(anyhow::Error),
    /// `run` panicked
    Panicked(String),
}

impl RuntimeFailure {
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic with a non-string payload".to_string()
        };
        RuntimeFailure::Panicked(message)
    }

    /// Full diagnostic text: the error with its cause chain, or the panic message
    pub fn diagnostic(&self) -> String {
        match self {
            RuntimeFailure::Error(e) => format!("{:?}", e),
            RuntimeFailure::Panicked(message) => format!("runtime panicked: {}", message),
        }
    }
}

impl fmt::Display for RuntimeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeFailure::Error(e) => write!(f, "{:#}", e),
            RuntimeFailure::Panicked(message) => write!(f, "runtime panicked: {}", message),
        }
    }
}

/// Result of handing the failure to the fatal logger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingOutcome {
    /// Nothing to record: the runtime returned but reported an unclean exit
    NotNeeded,
    Recorded,
    /// The fatal logger failed; the diagnostic went to standard error instead
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    CleanExit,
    Faulted,
    LoggingAttempted,
    ArchivalAttempted,
    NotificationShown,
    Terminated(i32),
}

/// What the shutdown path did after the runtime faulted
#[derive(Debug)]
pub struct ShutdownReport {
    pub failure: Option<RuntimeFailure>,
    pub logging: LoggingOutcome,
    pub archived_log: Option<PathBuf>,
    /// False when the notifier could not show anything
    pub notification_shown: bool,
    pub phases: Vec<Phase>,
}

#[derive(Debug)]
pub enum Termination {
    Clean,
    Faulted(ShutdownReport),
}

impl Termination {
    pub fn exit_code(&self) -> i32 {
        match self {
            Termination::Clean => 0,
            Termination::Faulted(_) => 1,
        }
    }
}

/// Content of the error notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub title: String,
    pub archive_dir: PathBuf,
    pub archived_log: Option<PathBuf>,
}

impl ErrorNotice {
    pub fn new(title: impl Into<String>, archive_dir: &Path, archived_log: Option<PathBuf>) -> Self {
        Self {
            title: title.into(),
            archive_dir: archive_dir.to_path_buf(),
            archived_log,
        }
    }

    /// Text lines, top to bottom
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![ERROR_HEADLINE.to_string()];
        if self.archived_log.is_some() {
            let dir = self
                .archive_dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.archive_dir.display().to_string());
            lines.push(format!("The log file was copied to the '{}' directory.", dir));
        }
        lines
    }
}
