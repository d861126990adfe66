// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All of the prototype's design tokens in one place.

## Organization

- **Palette**: Base colors (Tailwind-like scale used by the mock-ups)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Phone frame and component sizes, per layout
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use salary_guard::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_50: Color = Color::from_rgb8(0xF8, 0xF9, 0xFA);
    pub const GRAY_100: Color = Color::from_rgb8(0xF3, 0xF4, 0xF6);
    pub const GRAY_200: Color = Color::from_rgb8(0xE5, 0xE7, 0xEB);
    pub const GRAY_400: Color = Color::from_rgb8(0x9C, 0xA3, 0xAF);
    pub const GRAY_500: Color = Color::from_rgb8(0x6B, 0x72, 0x80);
    pub const GRAY_600: Color = Color::from_rgb8(0x4B, 0x55, 0x63);
    pub const GRAY_700: Color = Color::from_rgb8(0x37, 0x41, 0x51);
    pub const GRAY_800: Color = Color::from_rgb8(0x1F, 0x29, 0x37);
    pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);

    // Desk surface around the phones
    pub const SLATE_100: Color = Color::from_rgb8(0xF1, 0xF5, 0xF9);
    pub const SLATE_900: Color = Color::from_rgb8(0x0F, 0x17, 0x2A);

    // Brand colors (blue scale)
    pub const PRIMARY_50: Color = Color::from_rgb8(0xEF, 0xF6, 0xFF);
    pub const PRIMARY_100: Color = Color::from_rgb8(0xDB, 0xEA, 0xFE);
    pub const PRIMARY_200: Color = Color::from_rgb8(0xBF, 0xDB, 0xFE);
    pub const PRIMARY_600: Color = Color::from_rgb8(0x25, 0x63, 0xEB);
    pub const PRIMARY_700: Color = Color::from_rgb8(0x1D, 0x4E, 0xD8);
    pub const PRIMARY_800: Color = Color::from_rgb8(0x1E, 0x40, 0xAF);

    // Semantic colors
    pub const ERROR_50: Color = Color::from_rgb8(0xFE, 0xF2, 0xF2);
    pub const ERROR_100: Color = Color::from_rgb8(0xFE, 0xE2, 0xE2);
    pub const ERROR_500: Color = Color::from_rgb8(0xEF, 0x44, 0x44);
    pub const ERROR_600: Color = Color::from_rgb8(0xDC, 0x26, 0x26);
    pub const SUCCESS_50: Color = Color::from_rgb8(0xF0, 0xFD, 0xF4);
    pub const SUCCESS_200: Color = Color::from_rgb8(0xBB, 0xF7, 0xD0);
    pub const SUCCESS_500: Color = Color::from_rgb8(0x10, 0xB9, 0x81);
    pub const SUCCESS_600: Color = Color::from_rgb8(0x05, 0x96, 0x69);
    pub const WARNING_50: Color = Color::from_rgb8(0xFE, 0xFC, 0xE8);
    pub const WARNING_200: Color = Color::from_rgb8(0xFE, 0xF0, 0x8A);
    pub const WARNING_600: Color = Color::from_rgb8(0xD9, 0x77, 0x06);

    // Commitment accents (confirmation note, retention badge)
    pub const PURPLE_50: Color = Color::from_rgb8(0xFA, 0xF5, 0xFF);
    pub const PURPLE_100: Color = Color::from_rgb8(0xF3, 0xE8, 0xFF);
    pub const PURPLE_600: Color = Color::from_rgb8(0x7C, 0x3A, 0xED);
    pub const VIOLET_500: Color = Color::from_rgb8(0x8B, 0x5C, 0xF6);
    pub const INDIGO_500: Color = Color::from_rgb8(0x63, 0x66, 0xF1);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.12;
    pub const OVERLAY_MEDIUM: f32 = 0.35;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    //! Fixed sizes. Phone dimensions come in a wide and a narrow variant;
    //! [`LayoutMetrics`](crate::ui::viewport::LayoutMetrics) picks between them.

    // Phone screen (inside the bezel)
    pub const SCREEN_WIDTH_WIDE: f32 = 390.0;
    pub const SCREEN_HEIGHT_WIDE: f32 = 844.0;
    pub const SCREEN_WIDTH_NARROW: f32 = 320.0;
    pub const SCREEN_HEIGHT_NARROW: f32 = 680.0;

    // Black bezel around the screen
    pub const BEZEL_WIDE: f32 = 12.0;
    pub const BEZEL_NARROW: f32 = 8.0;

    pub const STATUS_BAR_WIDE: f32 = 44.0;
    pub const STATUS_BAR_NARROW: f32 = 32.0;

    pub const HOME_INDICATOR_WIDE: f32 = 128.0;
    pub const HOME_INDICATOR_NARROW: f32 = 96.0;
    pub const HOME_INDICATOR_HEIGHT: f32 = 4.0;

    // Floating card inside the onboarding/percentage/confirmation screens
    pub const CARD_WIDTH_WIDE: f32 = 320.0;
    pub const CARD_WIDTH_NARROW: f32 = 280.0;

    /// Caption row above each phone.
    pub const FRAME_HEADING_HEIGHT: f32 = 24.0;

    // Fixed chrome around the scrolling frames
    pub const BANNER_HEIGHT_WIDE: f32 = 152.0;
    pub const BANNER_HEIGHT_NARROW: f32 = 124.0;
    pub const FOOTER_HEIGHT: f32 = 72.0;
    pub const BANNER_MAX_WIDTH: f32 = 896.0;

    // Small elements
    pub const PAGE_DOT: f32 = 8.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 8.0;
    pub const BATTERY_WIDTH: f32 = 17.0;
    pub const BATTERY_HEIGHT: f32 = 12.0;
    pub const BUTTON_HEIGHT: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Headlines inside the phone screens
    //! - Body: Primary content text
    //! - Caption: Research notes, labels, badges

    /// Large title - Balance and score values
    pub const TITLE_LG: f32 = 24.0;

    /// Medium title - Screen headlines
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Secondary headlines
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Banner headline, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Small body - Secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Insights, badges
    pub const CAPTION: f32 = 12.0;

    /// Research footnotes
    pub const FOOTNOTE: f32 = 10.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Note boxes
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const BEZEL_WIDE: f32 = 48.0;
    pub const BEZEL_NARROW: f32 = 32.0;
    pub const SCREEN_WIDE: f32 = 40.0;
    pub const SCREEN_NARROW: f32 = 32.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    /// Floating card inside a phone screen (`0 8px 24px rgba(0,0,0,.12)`)
    pub const CARD: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };

    pub const PHONE: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 25.0 },
        blur_radius: 50.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Phone validation
    assert!(sizing::SCREEN_WIDTH_WIDE > sizing::SCREEN_WIDTH_NARROW);
    assert!(sizing::SCREEN_HEIGHT_WIDE > sizing::SCREEN_HEIGHT_NARROW);
    assert!(sizing::CARD_WIDTH_WIDE < sizing::SCREEN_WIDTH_WIDE);
    assert!(sizing::CARD_WIDTH_NARROW < sizing::SCREEN_WIDTH_NARROW);
    assert!(sizing::BANNER_HEIGHT_WIDE > sizing::BANNER_HEIGHT_NARROW);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
    assert!(typography::CAPTION > typography::FOOTNOTE);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_blue_matches_prototype_hex() {
        let blue = palette::PRIMARY_600;
        assert!((blue.r - 37.0 / 255.0).abs() < 1e-6);
        assert!((blue.g - 99.0 / 255.0).abs() < 1e-6);
        assert!((blue.b - 235.0 / 255.0).abs() < 1e-6);
    }
}
