// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Navigation button in the banner.
///
/// The selected frame's button is filled with the brand blue in both themes;
/// the others follow the desk surface.
pub fn nav(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            return brand(status, radius::MD);
        }

        let is_light = matches!(theme, Theme::Light);
        let (background, hovered, text_color, border_color) = if is_light {
            (
                WHITE,
                palette::GRAY_100,
                palette::GRAY_700,
                palette::GRAY_200,
            )
        } else {
            (
                palette::GRAY_800,
                palette::GRAY_700,
                palette::GRAY_100,
                palette::GRAY_700,
            )
        };

        button::Style {
            background: Some(Background::Color(match status {
                button::Status::Hovered | button::Status::Pressed => hovered,
                _ => background,
            })),
            text_color,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Call-to-action inside a phone screen. Phones are always drawn light.
pub fn confirm(_theme: &Theme, status: button::Status) -> button::Style {
    brand(status, radius::LG)
}

fn brand(status: button::Status, corner: f32) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_700,
        button::Status::Pressed => palette::PRIMARY_800,
        _ => palette::PRIMARY_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_700,
            width: border::WIDTH_SM,
            radius: corner.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::CARD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_nav_button_uses_brand_blue() {
        let style = nav(true)(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_600))
        );
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn unselected_nav_button_follows_theme() {
        let light = nav(false)(&Theme::Light, button::Status::Active);
        let dark = nav(false)(&Theme::Dark, button::Status::Active);
        assert_ne!(light.background, dark.background);
        assert_ne!(
            light.background,
            Some(Background::Color(palette::PRIMARY_600))
        );
    }

    #[test]
    fn confirm_darkens_on_hover() {
        let active = confirm(&Theme::Light, button::Status::Active);
        let hovered = confirm(&Theme::Light, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }
}
