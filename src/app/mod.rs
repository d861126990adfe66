// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns every piece of view state: the selected frame, the
//! savings rate, the viewport class, and the scroll state of the frame strip.
//! All of it is mutated only through [`App::update`], one message at a time.

pub mod config;
mod frame;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use frame::Frame;
pub use message::{Flags, Message};

use crate::domain::savings::{SavingsPercent, SavingsSplit};
use crate::i18n::fluent::I18n;
use crate::ui::navigator::FrameNavigator;
use crate::ui::theming::ThemeMode;
use crate::ui::viewport::ViewportClassifier;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    display_name: String,
    savings: SavingsPercent,
    viewport: ViewportClassifier,
    navigator: FrameNavigator,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selected", &self.navigator.selected())
            .field("savings", &self.savings)
            .field("layout", &self.viewport.layout())
            .finish()
    }
}

/// Builds the window settings from the loaded configuration.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window_size();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load();
    if let Some(error) = config_warning {
        tracing::warn!(%error, "ignoring settings file, using defaults");
    }
    let window = window_settings(&config);

    // iced 0.14 requires a Fn boot closure; the state is consumed once.
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            display_name: config::DEFAULT_DISPLAY_NAME.to_string(),
            savings: SavingsPercent::default(),
            viewport: ViewportClassifier::new(config::DEFAULT_WINDOW_WIDTH as f32),
            navigator: FrameNavigator::new(),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl App {
    /// Initializes application state from the loaded config and the
    /// command-line overrides.
    pub fn new(flags: Flags, config: Config) -> (Self, Task<Message>) {
        let i18n = match I18n::new() {
            Ok(i18n) => i18n,
            Err(error) => {
                tracing::warn!(%error, "copy bundle unavailable");
                I18n::empty()
            }
        };

        let display_name = flags
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| config.display_name())
            .to_string();
        let (width, _) = config.window_size();

        let app = App {
            i18n,
            display_name,
            viewport: ViewportClassifier::new(width as f32),
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
            ..Self::default()
        };

        tracing::info!(
            name = %app.display_name,
            width,
            layout = ?app.viewport.layout(),
            "starting prototype"
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.navigator.is_animating());

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            savings: &mut self.savings,
            viewport: &mut self.viewport,
            navigator: &mut self.navigator,
        };

        match message {
            Message::Banner(banner_message) => {
                update::handle_banner_message(&mut ctx, banner_message)
            }
            Message::Screen(screen_message) => {
                update::handle_screen_message(&mut ctx, screen_message)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::FramesScrolled { offset, cross } => {
                update::handle_frames_scrolled(&mut ctx, offset, cross)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            display_name: &self.display_name,
            selected: self.navigator.selected(),
            percent: self.savings,
            layout: self.viewport.layout(),
        })
    }

    #[must_use]
    pub fn selected_frame(&self) -> Frame {
        self.navigator.selected()
    }

    #[must_use]
    pub fn savings_percent(&self) -> SavingsPercent {
        self.savings
    }

    /// Save/spend amounts at the current rate.
    #[must_use]
    pub fn split(&self) -> SavingsSplit {
        SavingsSplit::at(self.savings)
    }

    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.viewport.is_narrow()
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.navigator.is_animating()
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }
}
