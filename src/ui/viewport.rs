// SPDX-License-Identifier: MPL-2.0
//! Viewport classification.
//!
//! The window width decides between two static arrangements of the same
//! content: a wide row of full-size phones, or a narrow stacked column of
//! smaller phones. The class is recomputed on every resize notification.

use crate::config::NARROW_VIEWPORT_THRESHOLD;
use crate::ui::design_tokens::{radius, sizing, spacing};
use iced::Size;

/// Returns true when `width` (logical pixels) is below the narrow threshold.
#[must_use]
pub fn is_narrow(width: f32) -> bool {
    width < NARROW_VIEWPORT_THRESHOLD
}

/// Layout arrangement chosen from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutClass {
    Wide,
    Narrow,
}

impl LayoutClass {
    #[must_use]
    pub fn classify(width: f32) -> Self {
        if is_narrow(width) {
            LayoutClass::Narrow
        } else {
            LayoutClass::Wide
        }
    }

    #[must_use]
    pub fn is_narrow(self) -> bool {
        self == LayoutClass::Narrow
    }

    #[must_use]
    pub fn metrics(self) -> LayoutMetrics {
        match self {
            LayoutClass::Wide => LayoutMetrics {
                screen: Size::new(sizing::SCREEN_WIDTH_WIDE, sizing::SCREEN_HEIGHT_WIDE),
                bezel: sizing::BEZEL_WIDE,
                bezel_radius: radius::BEZEL_WIDE,
                screen_radius: radius::SCREEN_WIDE,
                status_bar_height: sizing::STATUS_BAR_WIDE,
                home_indicator_width: sizing::HOME_INDICATOR_WIDE,
                card_width: sizing::CARD_WIDTH_WIDE,
                screen_padding: spacing::MD,
                frame_gap: spacing::XL,
                content_padding: spacing::XL,
                banner_height: sizing::BANNER_HEIGHT_WIDE,
                footer_height: sizing::FOOTER_HEIGHT,
            },
            LayoutClass::Narrow => LayoutMetrics {
                screen: Size::new(sizing::SCREEN_WIDTH_NARROW, sizing::SCREEN_HEIGHT_NARROW),
                bezel: sizing::BEZEL_NARROW,
                bezel_radius: radius::BEZEL_NARROW,
                screen_radius: radius::SCREEN_NARROW,
                status_bar_height: sizing::STATUS_BAR_NARROW,
                home_indicator_width: sizing::HOME_INDICATOR_NARROW,
                card_width: sizing::CARD_WIDTH_NARROW,
                screen_padding: spacing::SM,
                frame_gap: spacing::LG,
                content_padding: spacing::MD,
                banner_height: sizing::BANNER_HEIGHT_NARROW,
                footer_height: sizing::FOOTER_HEIGHT,
            },
        }
    }
}

/// Sizes that differ between the two layout arrangements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub screen: Size,
    pub bezel: f32,
    pub bezel_radius: f32,
    pub screen_radius: f32,
    pub status_bar_height: f32,
    pub home_indicator_width: f32,
    pub card_width: f32,
    pub screen_padding: f32,
    /// Space between two frames along the scroll axis.
    pub frame_gap: f32,
    /// Padding before the first and after the last frame.
    pub content_padding: f32,
    pub banner_height: f32,
    pub footer_height: f32,
}

impl LayoutMetrics {
    /// Outer size of a phone including its bezel.
    #[must_use]
    pub fn phone(&self) -> Size {
        Size::new(
            self.screen.width + 2.0 * self.bezel,
            self.screen.height + 2.0 * self.bezel,
        )
    }

    /// Outer size of one frame: caption row, gap, then the phone.
    #[must_use]
    pub fn frame(&self) -> Size {
        let phone = self.phone();
        Size::new(
            phone.width,
            sizing::FRAME_HEADING_HEIGHT + spacing::SM + phone.height,
        )
    }
}

/// Tracks the window size and the layout class derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportClassifier {
    layout: LayoutClass,
    window: Option<Size>,
}

impl ViewportClassifier {
    /// Classifies the initial width before the window has reported its size.
    #[must_use]
    pub fn new(initial_width: f32) -> Self {
        Self {
            layout: LayoutClass::classify(initial_width),
            window: None,
        }
    }

    /// Records a window size notification. Returns true if the layout class changed.
    pub fn observe(&mut self, size: Size) -> bool {
        let previous = self.layout;
        self.window = Some(size);
        self.layout = LayoutClass::classify(size.width);
        previous != self.layout
    }

    #[must_use]
    pub fn layout(&self) -> LayoutClass {
        self.layout
    }

    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.layout.is_narrow()
    }

    /// Last window size reported by the windowing system, if any.
    #[must_use]
    pub fn window(&self) -> Option<Size> {
        self.window
    }
}
