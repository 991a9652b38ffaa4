//! forty-five desktop launcher
//!
//! Opens the application window and, if the application does not shut down
//! cleanly, archives the log and tells the user before exiting with status 1.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use clap::Parser;
use fortyfive_launcher::gui::{DialogNotifier, Fault, ShellRuntime};
use fortyfive_launcher::launcher::{FileFatalLogger, Launcher, Termination};
use fortyfive_launcher::utils::{
    self, platform, DeploymentLayout, LauncherSettings, SettingsSource,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "forty-five", version, about)]
struct Args {
    /// Settings file (default: ./launcher.json, then the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Deployment layout, selects the archive directory
    #[arg(long, value_enum)]
    layout: Option<DeploymentLayout>,

    /// Window title
    #[arg(long)]
    title: Option<String>,

    /// Window width; the height follows a 16:9 ratio
    #[arg(long)]
    width: Option<u32>,

    /// Foreground frame-rate cap
    #[arg(long)]
    fps: Option<u32>,

    /// Make the shell runtime fail on purpose to exercise the crash path
    #[arg(long, value_enum)]
    fault: Option<Fault>,
}

impl Args {
    fn apply(&self, settings: &mut LauncherSettings) {
        if let Some(layout) = self.layout {
            settings.layout = layout;
        }
        if let Some(title) = &self.title {
            settings.title = title.clone();
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(fps) = self.fps {
            settings.foreground_fps = fps;
        }
        settings.validate();
    }
}

fn main() -> Result<()> {
    platform::attach_parent_console();
    let args = Args::parse();

    let loaded = LauncherSettings::load(args.config.as_deref())?;
    let mut settings = loaded.settings;
    args.apply(&mut settings);

    // Initialize logging
    utils::init_logging(&settings);
    utils::install_panic_hook();

    match &loaded.source {
        SettingsSource::Defaults => info!("Using default launcher settings"),
        SettingsSource::File(path) => info!("Loaded launcher settings from {:?}", path),
        SettingsSource::Invalid { path, reason } => {
            warn!("Ignoring invalid settings file {:?}: {}", path, reason)
        }
    }

    let launcher = Launcher::new(
        &settings,
        ShellRuntime::new(args.fault),
        FileFatalLogger::new(settings.log_file()),
        DialogNotifier::new(),
    );

    let termination = launcher.launch();
    if let Termination::Faulted(report) = &termination {
        info!(
            "Exiting after fault (logging: {:?}, archived: {:?})",
            report.logging, report.archived_log
        );
        std::process::exit(termination.exit_code());
    }

    Ok(())
}
