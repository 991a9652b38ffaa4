//! Launcher configuration

use crate::launcher::LaunchConfig;
use crate::utils::error::LauncherError;
use crate::utils::platform;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_APP_NAME: &str = "forty-five";
pub const DEFAULT_TITLE: &str = ".forty-five";
pub const DEFAULT_WIDTH: u32 = 900;
pub const MAX_WIDTH: u32 = 16384;
pub const DEFAULT_FOREGROUND_FPS: u32 = 60;
pub const DEFAULT_ICON: &str = "textures/icon.png";
pub const DEFAULT_LOG_DIR: &str = "logging";
pub const SETTINGS_FILE_NAME: &str = "launcher.json";

/// Where the archive directory lives relative to the working directory.
///
/// Packaged builds run next to `error_logs/`; the development layout runs one
/// level below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentLayout {
    #[default]
    Bundled,
    Nested,
}

impl DeploymentLayout {
    pub fn archive_dir(self) -> PathBuf {
        match self {
            DeploymentLayout::Bundled => PathBuf::from("./error_logs"),
            DeploymentLayout::Nested => PathBuf::from("../error_logs"),
        }
    }
}

/// Launcher settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherSettings {
    /// Application name, also the log file stem
    pub app_name: String,

    /// Window title
    pub title: String,

    /// Window width in logical pixels; the height follows a 16:9 ratio
    pub width: u32,

    /// Frame-rate cap while the window is focused
    pub foreground_fps: u32,

    /// Window icon, relative to the working directory
    pub icon: Option<PathBuf>,

    /// Directory holding the live log file
    pub log_dir: PathBuf,

    /// Deployment layout used to pick the archive directory
    pub layout: DeploymentLayout,

    /// Explicit archive directory, overrides `layout`
    pub archive_dir: Option<PathBuf>,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            foreground_fps: DEFAULT_FOREGROUND_FPS,
            icon: Some(PathBuf::from(DEFAULT_ICON)),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            layout: DeploymentLayout::default(),
            archive_dir: None,
        }
    }
}

/// Where the settings came from
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsSource {
    Defaults,
    File(PathBuf),
    /// The file existed but could not be parsed; defaults were used
    Invalid { path: PathBuf, reason: String },
}

/// Settings together with their origin, so the caller can log it once logging is up
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: LauncherSettings,
    pub source: SettingsSource,
}

impl LauncherSettings {
    /// Path of the live log file: `<log_dir>/<app_name>.log`
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(format!("{}.log", self.app_name))
    }

    pub fn archive_dir(&self) -> PathBuf {
        self.archive_dir
            .clone()
            .unwrap_or_else(|| self.layout.archive_dir())
    }

    /// 16:9 height; never larger than the width, so it always fits
    pub fn window_height(&self) -> u32 {
        (u64::from(self.width) * 9 / 16) as u32
    }

    /// Build the immutable configuration handed to the runtime
    pub fn launch_config(&self) -> LaunchConfig {
        LaunchConfig {
            width: self.width,
            height: self.window_height(),
            title: self.title.clone(),
            foreground_fps: self.foreground_fps,
            icon: self.icon.clone(),
        }
    }

    /// Enforce sane limits
    pub fn validate(&mut self) {
        self.width = self.width.clamp(1, MAX_WIDTH);
        if self.foreground_fps == 0 {
            self.foreground_fps = 1;
        }
        if self.title.trim().is_empty() {
            self.title = DEFAULT_TITLE.to_string();
        }
        if self.app_name.trim().is_empty() {
            self.app_name = DEFAULT_APP_NAME.to_string();
        }
    }

    /// Read settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, LauncherError> {
        let raw = std::fs::read_to_string(path)?;
        let mut settings: Self = serde_json::from_str(&raw)?;
        settings.validate();
        Ok(settings)
    }

    /// Load settings from an explicit path, or from the first settings file found.
    ///
    /// An explicit path must exist and parse. Discovered files that fail to
    /// parse fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<LoadedSettings, LauncherError> {
        if let Some(path) = explicit {
            let settings = Self::from_file(path)?;
            return Ok(LoadedSettings {
                settings,
                source: SettingsSource::File(path.to_path_buf()),
            });
        }

        Ok(Self::discover(&platform::settings_candidates()))
    }

    /// Use the first existing candidate, or defaults if none exists
    pub fn discover(candidates: &[PathBuf]) -> LoadedSettings {
        let Some(path) = candidates.iter().find(|p| p.is_file()) else {
            return LoadedSettings {
                settings: Self::default(),
                source: SettingsSource::Defaults,
            };
        };

        match Self::from_file(path) {
            Ok(settings) => LoadedSettings {
                settings,
                source: SettingsSource::File(path.clone()),
            },
            Err(e) => LoadedSettings {
                settings: Self::default(),
                source: SettingsSource::Invalid {
                    path: path.clone(),
                    reason: e.to_string(),
                },
            },
        }
    }
}
