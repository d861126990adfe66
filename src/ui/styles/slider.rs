// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Savings-rate slider: brand-blue fill up to the handle, gray rail after it,
/// and a white handle ringed in blue.
pub fn savings(_theme: &Theme, status: slider::Status) -> slider::Style {
    let handle_radius = match status {
        slider::Status::Hovered | slider::Status::Dragged => 12.0,
        slider::Status::Active => 10.0,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::PRIMARY_600),
                Background::Color(palette::GRAY_200),
            ),
            width: 8.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::SM.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: handle_radius,
            },
            background: Background::Color(palette::WHITE),
            border_width: border::WIDTH_MD,
            border_color: palette::PRIMARY_600,
        },
    }
}
