// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Salary**: The fixed monthly salary the savings split is computed from
//! - **Savings Rate**: Slider bounds and the anchored default
//! - **Viewport**: Narrow layout threshold
//! - **Window**: Initial and minimum window size
//! - **Scroll**: Smooth-scroll animation timing
//!
//! The salary and the viewport threshold are compiled in and have no
//! override in `settings.toml`.

// ==========================================================================
// Salary Defaults
// ==========================================================================

pub use crate::domain::savings::MONTHLY_SALARY;

// ==========================================================================
// Savings Rate Defaults
// ==========================================================================

use crate::domain::savings::percent_bounds;

/// Lowest savings percentage the slider allows.
pub const MIN_SAVINGS_PERCENT: u8 = percent_bounds::MIN;

/// Highest savings percentage the slider allows.
pub const MAX_SAVINGS_PERCENT: u8 = percent_bounds::MAX;

/// Anchored default savings percentage ("AI recommends: 12%").
pub const DEFAULT_SAVINGS_PERCENT: u8 = percent_bounds::DEFAULT;

// ==========================================================================
// Viewport Defaults
// ==========================================================================

/// Windows narrower than this (in logical pixels) use the stacked layout.
pub const NARROW_VIEWPORT_THRESHOLD: f32 = 768.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 960;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: u32 = 380;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: u32 = 600;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Name used in the personalized home banner.
pub const DEFAULT_DISPLAY_NAME: &str = "Amit";

// ==========================================================================
// Scroll Animation Defaults
// ==========================================================================

/// Duration of the smooth scroll towards a frame (in milliseconds).
pub const SCROLL_ANIMATION_MS: u64 = 350;

/// Interval between animation ticks (in milliseconds).
pub const SCROLL_TICK_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SAVINGS_PERCENT < MAX_SAVINGS_PERCENT);
    assert!(DEFAULT_SAVINGS_PERCENT >= MIN_SAVINGS_PERCENT);
    assert!(DEFAULT_SAVINGS_PERCENT <= MAX_SAVINGS_PERCENT);
    assert!(MAX_SAVINGS_PERCENT <= 100);

    assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= DEFAULT_WINDOW_HEIGHT);

    assert!(SCROLL_TICK_MS < SCROLL_ANIMATION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_wide_layout() {
        assert!(DEFAULT_WINDOW_WIDTH as f32 >= NARROW_VIEWPORT_THRESHOLD);
    }

    #[test]
    fn minimum_window_can_reach_narrow_layout() {
        assert!((MIN_WINDOW_WIDTH as f32) < NARROW_VIEWPORT_THRESHOLD);
    }
}
