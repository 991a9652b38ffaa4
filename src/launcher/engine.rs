//! Launch and shutdown flow

use crate::launcher::archive::archive_log;
use crate::launcher::fatal::report_to_stderr;
use crate::launcher::models::{
    ErrorNotice, LaunchConfig, LoggingOutcome, Phase, RuntimeFailure, ShutdownReport, Termination,
};
use crate::launcher::traits::{AppRuntime, FatalLogger, Notifier};
use crate::utils::LauncherSettings;
use chrono::NaiveDateTime;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Starts the runtime and handles everything that happens when it does not
/// exit cleanly.
pub struct Launcher<R, L, N> {
    config: LaunchConfig,
    log_file: PathBuf,
    archive_dir: PathBuf,
    runtime: R,
    logger: L,
    notifier: N,
    clock: fn() -> NaiveDateTime,
}

impl<R, L, N> Launcher<R, L, N>
where
    R: AppRuntime,
    L: FatalLogger,
    N: Notifier,
{
    pub fn new(settings: &LauncherSettings, runtime: R, logger: L, notifier: N) -> Self {
        Self {
            config: settings.launch_config(),
            log_file: settings.log_file(),
            archive_dir: settings.archive_dir(),
            runtime,
            logger,
            notifier,
            clock: local_now,
        }
    }

    /// Replace the clock used to name archived logs
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Run the application to completion.
    ///
    /// Never panics and never returns an error: every failure ends up in the
    /// returned [`Termination`].
    pub fn launch(mut self) -> Termination {
        let mut phases = vec![Phase::Idle];

        info!(
            "Launching '{}' at {}x{} ({} fps)",
            self.config.title, self.config.width, self.config.height, self.config.foreground_fps
        );
        phases.push(Phase::Running);
        let failure = self.run_runtime();
        let clean_exit = self.runtime.clean_exit();

        if failure.is_none() && clean_exit {
            phases.push(Phase::CleanExit);
            info!("Application exited cleanly");
            return Termination::Clean;
        }

        phases.push(Phase::Faulted);
        match &failure {
            Some(f) => error!("Application failed: {}", f),
            None => warn!("Application returned without a clean exit"),
        }

        Termination::Faulted(self.shutdown(failure, phases))
    }

    fn run_runtime(&mut self) -> Option<RuntimeFailure> {
        let runtime = &mut self.runtime;
        let config = &self.config;

        match panic::catch_unwind(AssertUnwindSafe(|| runtime.run(config))) {
            Ok(Ok(())) => None,
            Ok(Err(e)) => Some(RuntimeFailure::Error(e)),
            Err(payload) => Some(RuntimeFailure::from_panic(payload)),
        }
    }

    /// Every step runs regardless of how the previous one went
    fn shutdown(&self, failure: Option<RuntimeFailure>, mut phases: Vec<Phase>) -> ShutdownReport {
        phases.push(Phase::LoggingAttempted);
        let logging = match &failure {
            None => LoggingOutcome::NotNeeded,
            Some(f) => self.record(f),
        };

        phases.push(Phase::ArchivalAttempted);
        let archived_log = archive_log(&self.log_file, &self.archive_dir, (self.clock)());

        let notice = ErrorNotice::new(
            self.config.title.clone(),
            &self.archive_dir,
            archived_log.clone(),
        );
        phases.push(Phase::NotificationShown);
        let notified = panic::catch_unwind(AssertUnwindSafe(|| self.notifier.notify(&notice)));
        let notification_shown = match notified {
            Ok(Ok(())) => {
                debug!("Error notification acknowledged");
                true
            }
            Ok(Err(e)) => {
                warn!("{}", e);
                print_notice(&notice);
                false
            }
            Err(_) => {
                warn!("Notifier panicked");
                print_notice(&notice);
                false
            }
        };

        phases.push(Phase::Terminated(1));
        ShutdownReport {
            failure,
            logging,
            archived_log,
            notification_shown,
            phases,
        }
    }

    fn record(&self, failure: &RuntimeFailure) -> LoggingOutcome {
        let recorded = panic::catch_unwind(AssertUnwindSafe(|| self.logger.record_fatal(failure)));
        match recorded {
            Ok(Ok(())) => LoggingOutcome::Recorded,
            Ok(Err(e)) => {
                report_to_stderr(failure);
                warn!("Fatal logging degraded: {}", e);
                LoggingOutcome::Degraded
            }
            Err(_) => {
                report_to_stderr(failure);
                warn!("Fatal logging degraded: logger panicked");
                LoggingOutcome::Degraded
            }
        }
    }
}

fn print_notice(notice: &ErrorNotice) {
    let mut stderr = std::io::stderr().lock();
    for line in notice.lines() {
        let _ = writeln!(stderr, "{}", line);
    }
}
