// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the showcase screen to localization and persisted
//! preferences, and translates showcase events into config updates.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::ui::showcase::{self, State as ShowcaseState};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    showcase: ShowcaseState,
    theme_mode: ThemeMode,
    config: Config,
    /// Translation key of a warning raised while loading the config.
    config_warning: Option<String>,
    /// Whether preference changes are written back to disk.
    persist: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("showcase", &self.showcase)
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            showcase: ShowcaseState::new(config.showcase.size, config.showcase.catalog),
            theme_mode: config.general.theme_mode,
            config,
            config_warning: None,
            persist: false,
        }
    }
}

impl App {
    /// Initializes application state from the persisted config and CLI flags.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let size = flags.size.unwrap_or(config.showcase.size);
        let catalog = flags.catalog.unwrap_or(config.showcase.catalog);
        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);

        tracing::info!(
            locale = %i18n.current_locale(),
            %size,
            %catalog,
            theme = %theme_mode,
            "starting showcase"
        );

        let app = Self {
            i18n,
            showcase: ShowcaseState::new(size, catalog),
            theme_mode,
            config,
            config_warning,
            persist: true,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.showcase.has_active_spinner())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Showcase(message) => {
                let event = self.showcase.update(message);
                self.handle_showcase_event(event);
            }
            Message::Tick(_) => {
                self.showcase.update(showcase::Message::SpinnerTick);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            showcase: &self.showcase,
            theme_mode: self.theme_mode,
            warning: self.config_warning.as_deref(),
        })
    }
}
