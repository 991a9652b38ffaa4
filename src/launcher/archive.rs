//! Best-effort log archival

use chrono::NaiveDateTime;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const ARCHIVE_TIMESTAMP_FORMAT: &str = "%d-%m-%Y_%H-%M-%S";
pub const ARCHIVE_EXTENSION: &str = "log";

/// `dd-MM-yyyy_HH-mm-ss.log`
pub fn archive_file_name(now: NaiveDateTime) -> String {
    format!("{}.{}", now.format(ARCHIVE_TIMESTAMP_FORMAT), ARCHIVE_EXTENSION)
}

/// Copy the log file into the archive directory.
///
/// Returns the archived path, or `None` when there was no regular log file or
/// the copy failed. The archive directory is not created and an existing
/// archive file is never overwritten.
pub fn archive_log(log_file: &Path, archive_dir: &Path, now: NaiveDateTime) -> Option<PathBuf> {
    let is_file = fs::metadata(log_file).map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        debug!("No log file at {:?}, skipping archival", log_file);
        return None;
    }

    let target = archive_dir.join(archive_file_name(now));
    match copy_to_new_file(log_file, &target) {
        Ok(bytes) => {
            info!("Archived log ({} bytes) to {:?}", bytes, target);
            Some(target)
        }
        Err(e) => {
            warn!("Failed to archive log {:?} to {:?}: {}", log_file, target, e);
            None
        }
    }
}

fn copy_to_new_file(source: &Path, target: &Path) -> io::Result<u64> {
    let mut reader = File::open(source)?;
    let mut writer = OpenOptions::new().write(true).create_new(true).open(target)?;

    let copied = io::copy(&mut reader, &mut writer).and_then(|bytes| {
        writer.sync_all()?;
        Ok(bytes)
    });
    if copied.is_err() {
        drop(writer);
        let _ = fs::remove_file(target);
    }
    copied
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap()
    }

    #[test]
    fn test_file_name_format() {
        assert_eq!(archive_file_name(fixed_time()), "07-03-2024_09-05-01.log");
    }

    #[test]
    fn test_directory_in_place_of_log_is_skipped() {
        let temp = TempDir::new().unwrap();
        let log_dir = temp.path().join("forty-five.log");
        fs::create_dir(&log_dir).unwrap();
        let archive_dir = temp.path().join("error_logs");
        fs::create_dir(&archive_dir).unwrap();

        assert_eq!(archive_log(&log_dir, &archive_dir, fixed_time()), None);
        assert_eq!(fs::read_dir(&archive_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_existing_archive_is_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let log = temp.path().join("forty-five.log");
        fs::write(&log, b"new run").unwrap();
        let archive_dir = temp.path().join("error_logs");
        fs::create_dir(&archive_dir).unwrap();
        let existing = archive_dir.join(archive_file_name(fixed_time()));
        fs::write(&existing, b"earlier crash").unwrap();

        assert_eq!(archive_log(&log, &archive_dir, fixed_time()), None);
        assert_eq!(fs::read(&existing).unwrap(), b"earlier crash");
    }
}
