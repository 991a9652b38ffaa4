//! Windowed shell runtime
//!
//! Opens the application window described by the [`LaunchConfig`] and drives
//! it at the configured frame rate. It carries no application logic of its
//! own; it exists so the launcher has a real runtime to start.

use crate::gui::icon;
use crate::launcher::{AppRuntime, ExitFlag, LaunchConfig};
use anyhow::anyhow;
use iced::widget::{column, container, text};
use iced::{
    executor, window, Alignment, Application, Command, Element, Length, Settings, Size,
    Subscription, Theme,
};
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Ways to make the shell fail on purpose, for exercising the crash path
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Fault {
    /// Panic on the first frame
    Panic,
    /// Fail before opening the window
    Error,
    /// Shut down on the first frame without a clean exit
    Unclean,
}

/// Runtime backed by an iced window
pub struct ShellRuntime {
    exit: ExitFlag,
    fault: Option<Fault>,
}

impl ShellRuntime {
    pub fn new(fault: Option<Fault>) -> Self {
        Self {
            exit: ExitFlag::new(),
            fault,
        }
    }
}

impl AppRuntime for ShellRuntime {
    fn run(&mut self, config: &LaunchConfig) -> anyhow::Result<()> {
        if self.fault == Some(Fault::Error) {
            return Err(anyhow!("shell runtime refused to start (injected fault)"));
        }

        let flags = ShellFlags {
            title: config.title.clone(),
            foreground_fps: config.foreground_fps.max(1),
            exit: self.exit.clone(),
            fault: self.fault,
        };

        let settings = Settings {
            window: window::Settings {
                size: Size::new(config.width as f32, config.height as f32),
                icon: config.icon.as_deref().and_then(icon::load_icon),
                exit_on_close_request: true,
                ..Default::default()
            },
            antialiasing: true,
            ..Settings::with_flags(flags)
        };

        ShellApp::run(settings).map_err(|e| anyhow!("shell runtime failed: {}", e))
    }

    fn clean_exit(&self) -> bool {
        self.exit.is_clean()
    }
}

pub struct ShellFlags {
    pub title: String,
    pub foreground_fps: u32,
    pub exit: ExitFlag,
    pub fault: Option<Fault>,
}

/// Shell application state
pub struct ShellApp {
    title: String,
    frame_time: Duration,
    frames: u64,
    started: Instant,
    last_frame: Instant,
    exit: ExitFlag,
    fault: Option<Fault>,
}

#[derive(Debug, Clone)]
pub enum ShellMessage {
    Frame(Instant),
}

impl Application for ShellApp {
    type Executor = executor::Default;
    type Message = ShellMessage;
    type Theme = Theme;
    type Flags = ShellFlags;

    fn new(flags: ShellFlags) -> (Self, Command<ShellMessage>) {
        let now = Instant::now();
        info!("Shell window opened, capped at {} fps", flags.foreground_fps);

        let app = Self {
            title: flags.title,
            frame_time: Duration::from_secs_f64(1.0 / f64::from(flags.foreground_fps)),
            frames: 0,
            started: now,
            last_frame: now,
            exit: flags.exit,
            fault: flags.fault,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn update(&mut self, message: ShellMessage) -> Command<ShellMessage> {
        match message {
            ShellMessage::Frame(now) => {
                self.frames += 1;
                self.last_frame = now;

                match self.fault {
                    Some(Fault::Panic) => panic!("shell runtime panicked (injected fault)"),
                    Some(Fault::Unclean) => {
                        error!("Unrecoverable shell state, shutting down");
                        self.exit.mark_unclean();
                        window::close(window::Id::MAIN)
                    }
                    _ => Command::none(),
                }
            }
        }
    }

    fn view(&self) -> Element<'_, ShellMessage> {
        let elapsed = self.last_frame.duration_since(self.started).as_secs_f32();

        let content = column![
            text(&self.title).size(28),
            text(format!("{} frames, {:.1}s", self.frames, elapsed)).size(14),
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into()
    }

    fn subscription(&self) -> Subscription<ShellMessage> {
        iced::time::every(self.frame_time).map(ShellMessage::Frame)
    }

    fn theme(&self) -> Self::Theme {
        Theme::Dark
    }
}
