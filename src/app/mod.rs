// SPDX-License-Identifier: MPL-2.0
//! Demo application exercising every bulletin preset.
//!
//! The `App` is the composition root: it owns the lifecycle controller and
//! its adapters, forwards overlay gestures to it, ticks it while bulletins
//! are active and lists the events it reports.

mod message;
pub mod preset;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use preset::{DemoContent, Preset};

use crate::config::{self, paths, Config};
use crate::lifecycle::{BulletinEvent, DismissOptions, LifecycleController, ModalRoute};
use crate::port::{FixedInsets, LayeredSurface, LogFeedback};
use crate::ui::design_tokens::sizing;
use crate::ui::overlay;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Entries kept in the event log.
const EVENT_LOG_CAPACITY: usize = 40;

/// Delay used by the "delayed" buttons.
const DEMO_DELAY: Duration = Duration::from_secs(2);

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root iced application state.
pub struct App {
    controller: LifecycleController<DemoContent>,
    /// Observer clone of the surface stack held by the controller.
    surface: LayeredSurface,
    config: Config,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    log: VecDeque<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("controller", &self.controller)
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);

        let surface = LayeredSurface::new();
        let controller = LifecycleController::new(
            config.controller_settings(),
            surface.clone(),
            FixedInsets::top(sizing::STATUS_BAR_HEIGHT),
            LogFeedback,
        );

        let mut app = App {
            controller,
            surface,
            config,
            theme_mode,
            colors: ColorScheme::for_mode(theme_mode),
            log: VecDeque::new(),
        };
        if let Some(warning) = config_warning {
            app.push_log(format!("config: {warning}, using defaults"));
        }
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.controller.displayed() {
            Some(bulletin) => format!("Iced Bulletin - {}", bulletin.content().title),
            None => "Iced Bulletin".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::ticks(self.controller.is_active())
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            controller: &self.controller,
            surface: &self.surface,
            colors: &self.colors,
            log: &self.log,
            theme_mode: self.theme_mode,
            now: Instant::now(),
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();

        match message {
            Message::Show(preset) => {
                let bulletin = preset.build(&self.config);
                self.push_log(format!("{} {} submitted", bulletin.id(), preset.label()));
                self.controller.enqueue(bulletin, now);
            }
            Message::ShowDelayed(preset) => {
                let bulletin = preset.build(&self.config);
                self.push_log(format!(
                    "{} {} due in {}s",
                    bulletin.id(),
                    preset.label(),
                    DEMO_DELAY.as_secs()
                ));
                self.controller.enqueue_after(bulletin, DEMO_DELAY, now);
            }
            Message::Burst => {
                for preset in [Preset::Banner, Preset::Notification, Preset::Banner] {
                    self.controller.enqueue(preset.build(&self.config), now);
                }
                self.push_log(format!("burst: {}", self.controller.queue()));
            }
            Message::DismissCurrent => self.dismiss_current(DismissOptions::default(), now),
            Message::DismissAndHold => self.dismiss_current(
                DismissOptions {
                    advance_queue: false,
                    ..DismissOptions::default()
                },
                now,
            ),
            Message::Resume => self.controller.resume(now),
            Message::RequestModal(kind) => {
                let route = match self.controller.route_modal(kind) {
                    ModalRoute::Host => "host".to_string(),
                    ModalRoute::Overlay(handle) => format!("overlay ({handle})"),
                };
                self.push_log(format!("{kind:?} modal goes to {route}"));
            }
            Message::Overlay(gesture) => overlay::apply(gesture, &mut self.controller, now),
            Message::ToggleTheme => self.toggle_theme(),
            Message::ClearLog => self.log.clear(),
            Message::Tick(_) => {}
        }

        self.controller.tick(now);
        self.collect_events();
        Task::none()
    }

    fn dismiss_current(&mut self, options: DismissOptions, now: Instant) {
        if let Some(id) = self.controller.displayed().map(|b| b.id()) {
            self.controller.dismiss_with(id, options, now);
        }
    }

    fn toggle_theme(&mut self) {
        self.theme_mode = if self.theme_mode.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.colors = ColorScheme::for_mode(self.theme_mode);
        self.config.general.theme_mode = self.theme_mode;
        if let Err(err) = config::save(&self.config) {
            tracing::warn!(%err, "failed to save config");
            self.push_log(format!("config: {err}"));
        }
    }

    fn collect_events(&mut self) {
        for event in self.controller.drain_events() {
            let line = match &event {
                BulletinEvent::Action { id, content } => {
                    format!("{id} action: {}", content.title)
                }
                other => format!("{} {}", other.id(), other.name()),
            };
            tracing::info!(event = event.name(), id = %event.id(), "bulletin event");
            self.push_log(line);
        }
    }

    fn push_log(&mut self, line: String) {
        if self.log.len() == EVENT_LOG_CAPACITY {
            self.log.pop_back();
        }
        self.log.push_front(line);
    }
}
