//! Fatal error recording

use crate::launcher::models::RuntimeFailure;
use crate::launcher::traits::FatalLogger;
use crate::utils::LauncherError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends the failure to the live log file and flushes it.
///
/// The file is not created: a missing log means logging never came up, and
/// the launcher falls back to standard error.
#[derive(Debug, Clone)]
pub struct FileFatalLogger {
    path: PathBuf,
}

impl FileFatalLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FatalLogger for FileFatalLogger {
    fn record_fatal(&self, failure: &RuntimeFailure) -> Result<(), LauncherError> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| LauncherError::LogSinkError(format!("{:?}: {}", self.path, e)))?;

        let time = chrono::Local::now().format("%H:%M:%S%.3f");
        writeln!(
            file,
            "[{} fatal] Encountered an exception that could not be recovered from",
            time
        )?;
        writeln!(file, "[{} fatal] {}", time, failure.diagnostic())?;
        file.flush()?;
        Ok(())
    }
}

/// Last-resort output of the failure. Never fails and never panics.
pub fn report_to_stderr(failure: &RuntimeFailure) {
    let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", failure.diagnostic());
        let _ = stderr.flush();
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fatal_block_is_appended() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("forty-five.log");
        std::fs::write(&path, "earlier line\n").unwrap();

        let logger = FileFatalLogger::new(&path);
        logger
            .record_fatal(&RuntimeFailure::Panicked("boom".to_string()))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("earlier line\n"));
        assert!(contents.contains("fatal] Encountered an exception that could not be recovered from"));
        assert!(contents.contains("fatal] runtime panicked: boom"));
    }

    #[test]
    fn test_missing_log_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let logger = FileFatalLogger::new(temp.path().join("logging/forty-five.log"));

        let result = logger.record_fatal(&RuntimeFailure::Panicked("boom".to_string()));
        assert!(matches!(result, Err(LauncherError::LogSinkError(_))));
        assert!(!logger.path().exists());
    }

    #[test]
    fn test_stderr_fallback_does_not_panic() {
        report_to_stderr(&RuntimeFailure::Error(anyhow::anyhow!("renderer died")));
    }
}
