// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::ui::banner;
use crate::ui::screens;
use crate::ui::theming::ThemeMode;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by [`App::update`](super::App::update).
#[derive(Debug, Clone)]
pub enum Message {
    Banner(banner::Message),
    Screen(screens::Message),
    /// The window opened or was resized.
    WindowResized(Size),
    /// The frame strip was scrolled, by the user or by an animation step.
    FramesScrolled {
        /// Absolute offset along the frame axis.
        offset: f32,
        /// Relative offset across the frame axis.
        cross: f32,
    },
    /// Animation clock.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Overrides the configured display name.
    pub name: Option<String>,
    /// Overrides the configured theme.
    pub theme: Option<ThemeMode>,
}
