// SPDX-License-Identifier: MPL-2.0
//! Container styles.
//!
//! Surfaces outside the phones (desk, banner, footer) follow the active
//! theme. Everything inside a phone screen is drawn light.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians, Theme};
use std::f32::consts::FRAC_PI_2;

/// Color family of a note box inside a phone screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Brand,
    Success,
    Error,
    Warning,
    Purple,
}

impl Tone {
    /// Text color used inside a note of this tone.
    #[must_use]
    pub fn text(self) -> Color {
        match self {
            Tone::Brand => palette::PRIMARY_800,
            Tone::Success => palette::SUCCESS_600,
            Tone::Error => palette::ERROR_600,
            Tone::Warning => palette::WARNING_600,
            Tone::Purple => palette::PURPLE_600,
        }
    }

    fn fill(self) -> (Color, Color) {
        match self {
            Tone::Brand => (palette::PRIMARY_50, palette::PRIMARY_100),
            Tone::Success => (palette::SUCCESS_50, palette::SUCCESS_200),
            Tone::Error => (palette::ERROR_50, palette::ERROR_100),
            Tone::Warning => (palette::WARNING_50, palette::WARNING_200),
            Tone::Purple => (palette::PURPLE_50, palette::PURPLE_100),
        }
    }
}

/// Background behind the scrolling frames.
pub fn desk(theme: &Theme) -> container::Style {
    let background = if matches!(theme, Theme::Light) {
        palette::SLATE_100
    } else {
        palette::SLATE_900
    };

    container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Navigation banner and metrics footer.
pub fn chrome(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);

    container::Style {
        background: Some(Background::Color(if is_light {
            palette::WHITE
        } else {
            palette::GRAY_900
        })),
        text_color: Some(if is_light {
            palette::GRAY_900
        } else {
            palette::GRAY_100
        }),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Insight strip inside the banner.
pub fn insight(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);

    container::Style {
        background: Some(Background::Color(if is_light {
            palette::PRIMARY_50
        } else {
            palette::GRAY_800
        })),
        text_color: Some(if is_light {
            palette::PRIMARY_800
        } else {
            palette::PRIMARY_200
        }),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Black phone body with the given corner radius.
pub fn bezel(corner: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::BLACK)),
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        shadow: shadow::PHONE,
        ..Default::default()
    }
}

/// App background inside the bezel.
pub fn screen(corner: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::GRAY_50)),
        text_color: Some(palette::GRAY_900),
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn status_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::BLACK),
        ..Default::default()
    }
}

pub fn home_indicator(_theme: &Theme) -> container::Style {
    pill(palette::GRAY_900)
}

/// Floating white card centered in the onboarding-style screens.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Small white panel on the home screen.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Tinted note box with a thin border.
pub fn note(tone: Tone) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (background, border_color) = tone.fill();
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(tone.text()),
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Blue gradient banner at the top of the home screen.
pub fn hero(_theme: &Theme) -> container::Style {
    gradient(palette::PRIMARY_600, palette::PRIMARY_700, radius::LG)
}

/// Violet gradient retention badge on the success screen.
pub fn badge(_theme: &Theme) -> container::Style {
    gradient(palette::VIOLET_500, palette::INDIGO_500, radius::MD)
}

/// Unfilled part of the emergency fund bar.
pub fn progress_track(_theme: &Theme) -> container::Style {
    pill(palette::GRAY_200)
}

/// Filled part of the emergency fund bar.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            Linear::new(Radians(FRAC_PI_2))
                .add_stop(0.0, palette::SUCCESS_600)
                .add_stop(1.0, palette::SUCCESS_500),
        ))),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Onboarding page indicator dot.
pub fn page_dot(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        pill(if active {
            palette::PRIMARY_600
        } else {
            palette::GRAY_200
        })
    }
}

/// Divider line above the pause note on the success screen.
pub fn divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        ..Default::default()
    }
}

fn pill(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn gradient(from: Color, to: Color, corner: f32) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            Linear::new(Radians(FRAC_PI_2))
                .add_stop(0.0, from)
                .add_stop(1.0, to),
        ))),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
