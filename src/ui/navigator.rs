// SPDX-License-Identifier: MPL-2.0
//! Frame navigation and smooth scrolling.
//!
//! Selecting a frame always updates the selection. Scrolling the frame into
//! the middle of the viewport only happens once the window has reported its
//! size; before that the scroll request is dropped without retry.
//!
//! Scroll positions are computed from the fixed frame sizes of the current
//! layout rather than measured, so a target offset is known before the frame
//! is ever drawn at its destination.

use crate::app::Frame;
use crate::config::{SCROLL_ANIMATION_MS, SCROLL_TICK_MS};
use crate::ui::viewport::LayoutClass;
use iced::widget::scrollable::RelativeOffset;
use iced::Size;
use std::time::{Duration, Instant};

/// Interval between animation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(SCROLL_TICK_MS);

/// Direction along which the frames are laid out and scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Positions of the five frames along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    pub axis: Axis,
    /// Padding before the first frame (and after the last).
    pub lead: f32,
    /// Length of one frame along the axis.
    pub extent: f32,
    pub gap: f32,
    /// Visible length of the scroll viewport along the axis.
    pub viewport: f32,
    /// Length of the content across the axis.
    pub cross_content: f32,
    /// Visible length of the scroll viewport across the axis.
    pub cross_viewport: f32,
}

impl ScrollGeometry {
    /// Geometry of the frame strip for `layout` inside a window of `window` size.
    #[must_use]
    pub fn new(layout: LayoutClass, window: Size) -> Self {
        let metrics = layout.metrics();
        let frame = metrics.frame();

        let strip_height = window.height - metrics.banner_height - metrics.footer_height;

        let (axis, extent, viewport, cross_content, cross_viewport) = match layout {
            LayoutClass::Wide => (
                Axis::Horizontal,
                frame.width,
                window.width,
                2.0 * metrics.content_padding + frame.height,
                strip_height,
            ),
            // The column fills the window width and never scrolls sideways.
            LayoutClass::Narrow => (
                Axis::Vertical,
                frame.height,
                strip_height,
                window.width,
                window.width,
            ),
        };

        Self {
            axis,
            lead: metrics.content_padding,
            extent,
            gap: metrics.frame_gap,
            viewport: viewport.max(0.0),
            cross_content: cross_content.max(0.0),
            cross_viewport: cross_viewport.max(0.0),
        }
    }

    /// Total length of the scrollable content.
    #[must_use]
    pub fn content_length(&self) -> f32 {
        let count = Frame::ALL.len() as f32;
        2.0 * self.lead + count * self.extent + (count - 1.0) * self.gap
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_length() - self.viewport).max(0.0)
    }

    /// Offset that puts the center of `frame` at the center of the viewport,
    /// limited to the reachable range.
    #[must_use]
    pub fn centered_offset(&self, frame: Frame) -> f32 {
        let before = (frame.index() - 1) as f32;
        let center = self.lead + before * (self.extent + self.gap) + self.extent / 2.0;
        (center - self.viewport / 2.0).clamp(0.0, self.max_offset())
    }

    /// Relative offset across the axis that centers any frame.
    ///
    /// Frames sit alone across the axis, so their center is the content's
    /// center: halfway along the range whenever there is one.
    #[must_use]
    pub fn centered_cross(&self) -> f32 {
        if self.cross_content > self.cross_viewport {
            0.5
        } else {
            0.0
        }
    }

    /// Scroll position that centers `frame` on both axes.
    #[must_use]
    pub fn centered(&self, frame: Frame) -> ScrollPosition {
        ScrollPosition {
            main: self.centered_offset(frame),
            cross: self.centered_cross(),
        }
    }

    /// Converts an absolute offset into a fraction of the scroll range.
    #[must_use]
    pub fn relative(&self, offset: f32) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            0.0
        } else {
            (offset / max).clamp(0.0, 1.0)
        }
    }
}

/// Scroll position of the frame strip.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPosition {
    /// Absolute offset along the frame axis.
    pub main: f32,
    /// Fraction of the scroll range across the frame axis.
    pub cross: f32,
}

/// A running scroll from one position to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: ScrollPosition,
    to: ScrollPosition,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: ScrollPosition, to: ScrollPosition, started_at: Instant) -> Self {
        Self {
            from,
            to,
            started_at,
            duration: Duration::from_millis(SCROLL_ANIMATION_MS),
        }
    }

    /// Progress from 0.0 to 1.0 at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Position at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> ScrollPosition {
        let eased = ease_in_out_cubic(self.progress(now));
        ScrollPosition {
            main: self.from.main + (self.to.main - self.from.main) * eased,
            cross: self.from.cross + (self.to.cross - self.from.cross) * eased,
        }
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn target(&self) -> ScrollPosition {
        self.to
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One scroll position to apply to the frame strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    pub axis: Axis,
    /// Fraction of the scroll range along the frame axis.
    pub main: f32,
    /// Fraction of the scroll range across the frame axis.
    pub cross: f32,
}

impl ScrollStep {
    #[must_use]
    pub fn relative_offset(&self) -> RelativeOffset {
        match self.axis {
            Axis::Horizontal => RelativeOffset {
                x: self.main,
                y: self.cross,
            },
            Axis::Vertical => RelativeOffset {
                x: self.cross,
                y: self.main,
            },
        }
    }
}

/// Selected frame plus the scroll state of the frame strip.
#[derive(Debug, Clone, Default)]
pub struct FrameNavigator {
    selected: Frame,
    position: ScrollPosition,
    animation: Option<ScrollAnimation>,
}

impl FrameNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> Frame {
        self.selected
    }

    /// Current absolute offset along the frame axis.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.position.main
    }

    /// Current relative offset across the frame axis.
    #[must_use]
    pub fn cross(&self) -> f32 {
        self.position.cross
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Selects `frame` and starts scrolling towards it.
    ///
    /// Returns false when `geometry` is unknown; the selection still changes.
    pub fn navigate(
        &mut self,
        frame: Frame,
        geometry: Option<ScrollGeometry>,
        now: Instant,
    ) -> bool {
        self.selected = frame;

        let Some(geometry) = geometry else {
            self.animation = None;
            return false;
        };

        let target = geometry.centered(frame);
        self.animation = Some(ScrollAnimation::new(self.position, target, now));
        true
    }

    /// Records a scroll position reported by the frame strip.
    pub fn scrolled(&mut self, offset: f32, cross: f32) {
        self.position.main = offset;
        // NaN when the strip does not overflow across its axis
        self.position.cross = if cross.is_finite() {
            cross.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Drops any running animation and forgets the scroll position.
    ///
    /// Used when the layout switches axis: offsets along the old arrangement
    /// do not describe the new one.
    pub fn reset_scroll(&mut self) {
        self.animation = None;
        self.position = ScrollPosition::default();
    }

    /// Advances the running animation to `now`.
    ///
    /// Returns the position to apply, or `None` when nothing is animating.
    pub fn step(&mut self, now: Instant, geometry: Option<ScrollGeometry>) -> Option<ScrollStep> {
        let animation = self.animation?;
        let Some(geometry) = geometry else {
            self.animation = None;
            return None;
        };

        let sampled = animation.sample(now);
        self.position = ScrollPosition {
            main: sampled.main.clamp(0.0, geometry.max_offset()),
            cross: sampled.cross.clamp(0.0, 1.0),
        };
        if animation.is_finished(now) {
            self.animation = None;
        }

        Some(ScrollStep {
            axis: geometry.axis,
            main: geometry.relative(self.position.main),
            cross: self.position.cross,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide() -> ScrollGeometry {
        ScrollGeometry::new(LayoutClass::Wide, Size::new(1280.0, 960.0))
    }

    #[test]
    fn wide_geometry_scrolls_horizontally() {
        let geometry = wide();
        assert_eq!(geometry.axis, Axis::Horizontal);
        assert_eq!(geometry.extent, 414.0);
        // 2 * 32 + 5 * 414 + 4 * 32
        assert_eq!(geometry.content_length(), 2262.0);
        assert_eq!(geometry.max_offset(), 982.0);
    }

    #[test]
    fn narrow_geometry_scrolls_vertically() {
        let geometry = ScrollGeometry::new(LayoutClass::Narrow, Size::new(400.0, 900.0));
        let metrics = LayoutClass::Narrow.metrics();
        assert_eq!(geometry.axis, Axis::Vertical);
        assert_eq!(geometry.extent, metrics.frame().height);
        assert_eq!(
            geometry.viewport,
            900.0 - metrics.banner_height - metrics.footer_height
        );
    }

    #[test]
    fn middle_frame_centers_in_middle_of_range() {
        let geometry = wide();
        assert_eq!(geometry.centered_offset(Frame::Percentage), 491.0);
        assert_eq!(geometry.relative(491.0), 0.5);
    }

    #[test]
    fn edge_frames_clamp_to_range() {
        let geometry = wide();
        assert_eq!(geometry.centered_offset(Frame::Home), 0.0);
        assert_eq!(geometry.centered_offset(Frame::Success), geometry.max_offset());
    }

    #[test]
    fn content_shorter_than_viewport_never_scrolls() {
        let geometry = ScrollGeometry::new(LayoutClass::Wide, Size::new(5000.0, 960.0));
        assert_eq!(geometry.max_offset(), 0.0);
        for frame in Frame::ALL {
            assert_eq!(geometry.centered_offset(frame), 0.0);
        }
        assert_eq!(geometry.relative(100.0), 0.0);
    }

    #[test]
    fn wide_frames_center_vertically_when_taller_than_strip() {
        // 960 - 152 banner - 72 footer leaves 736 for a 956 tall row
        let geometry = wide();
        assert!(geometry.cross_content > geometry.cross_viewport);
        assert_eq!(geometry.centered_cross(), 0.5);
        assert_eq!(
            geometry.centered(Frame::Percentage),
            ScrollPosition {
                main: 491.0,
                cross: 0.5
            }
        );

        let tall = ScrollGeometry::new(LayoutClass::Wide, Size::new(1280.0, 2000.0));
        assert_eq!(tall.centered_cross(), 0.0);
    }

    #[test]
    fn narrow_column_never_scrolls_sideways() {
        let geometry = ScrollGeometry::new(LayoutClass::Narrow, Size::new(400.0, 900.0));
        assert_eq!(geometry.centered_cross(), 0.0);
    }

    #[test]
    fn reset_forgets_position_from_previous_layout() {
        let start = Instant::now();
        let mut navigator = FrameNavigator::new();
        navigator.scrolled(900.0, 0.4);
        navigator.navigate(Frame::Success, Some(wide()), start);

        navigator.reset_scroll();
        assert!(!navigator.is_animating());
        assert_eq!(navigator.offset(), 0.0);
        assert_eq!(navigator.cross(), 0.0);

        let narrow = ScrollGeometry::new(LayoutClass::Narrow, Size::new(500.0, 960.0));
        navigator.navigate(Frame::Onboarding, Some(narrow), start);
        let step = navigator
            .step(start, Some(narrow))
            .expect("animation should be running");
        assert_eq!(step.axis, Axis::Vertical);
        assert_eq!(step.main, 0.0);
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
    }

    #[test]
    fn animation_reaches_target_after_duration() {
        let start = Instant::now();
        let target = ScrollPosition {
            main: 400.0,
            cross: 0.5,
        };
        let animation = ScrollAnimation::new(ScrollPosition::default(), target, start);

        assert_eq!(animation.sample(start), ScrollPosition::default());
        assert!(!animation.is_finished(start));

        let end = start + Duration::from_millis(SCROLL_ANIMATION_MS);
        assert_eq!(animation.sample(end), target);
        assert!(animation.is_finished(end));

        let later = end + Duration::from_secs(1);
        assert_eq!(animation.sample(later), animation.target());
    }

    #[test]
    fn navigate_sets_selection_regardless_of_prior_frame() {
        let now = Instant::now();
        for from in Frame::ALL {
            for to in Frame::ALL {
                let mut navigator = FrameNavigator::new();
                navigator.navigate(from, Some(wide()), now);
                navigator.navigate(to, Some(wide()), now);
                assert_eq!(navigator.selected(), to);
            }
        }
    }

    #[test]
    fn repeated_navigation_is_idempotent() {
        let now = Instant::now();
        let mut navigator = FrameNavigator::new();
        navigator.navigate(Frame::Confirmation, Some(wide()), now);
        navigator.navigate(Frame::Confirmation, Some(wide()), now);
        assert_eq!(navigator.selected(), Frame::Confirmation);
    }

    #[test]
    fn unmounted_target_only_changes_selection() {
        let mut navigator = FrameNavigator::new();
        let scrolled = navigator.navigate(Frame::Success, None, Instant::now());

        assert!(!scrolled);
        assert_eq!(navigator.selected(), Frame::Success);
        assert!(!navigator.is_animating());
        assert_eq!(navigator.offset(), 0.0);
    }

    #[test]
    fn steps_drive_offset_to_target_then_stop() {
        let start = Instant::now();
        let geometry = wide();
        let mut navigator = FrameNavigator::new();
        assert!(navigator.navigate(Frame::Percentage, Some(geometry), start));

        let halfway = start + Duration::from_millis(SCROLL_ANIMATION_MS / 2);
        let step = navigator
            .step(halfway, Some(geometry))
            .expect("animation should be running");
        assert!(step.main > 0.0 && step.main < 0.5 + f32::EPSILON);
        assert!(navigator.is_animating());

        let end = start + Duration::from_millis(SCROLL_ANIMATION_MS);
        let step = navigator.step(end, Some(geometry)).expect("final step");
        assert_eq!(step.main, 0.5);
        assert_eq!(step.cross, 0.5);
        assert_eq!(navigator.offset(), 491.0);
        assert!(!navigator.is_animating());
        assert!(navigator.step(end, Some(geometry)).is_none());
    }

    #[test]
    fn new_request_restarts_from_current_offset() {
        let start = Instant::now();
        let geometry = wide();
        let mut navigator = FrameNavigator::new();
        navigator.scrolled(300.0, 0.25);
        navigator.navigate(Frame::Home, Some(geometry), start);

        let step = navigator.step(start, Some(geometry)).expect("first step");
        assert_eq!(navigator.offset(), 300.0);
        assert_eq!(step.cross, 0.25);
    }

    #[test]
    fn non_finite_cross_offset_resets() {
        let now = Instant::now();
        let mut navigator = FrameNavigator::new();
        navigator.scrolled(10.0, f32::NAN);
        navigator.navigate(Frame::Onboarding, Some(wide()), now);
        let step = navigator
            .step(now, Some(wide()))
            .expect("animation should be running");
        assert_eq!(step.cross, 0.0);
    }

    #[test]
    fn step_offsets_follow_axis() {
        let horizontal = ScrollStep {
            axis: Axis::Horizontal,
            main: 0.75,
            cross: 0.1,
        };
        let vertical = ScrollStep {
            axis: Axis::Vertical,
            ..horizontal
        };

        assert_eq!(horizontal.relative_offset().x, 0.75);
        assert_eq!(horizontal.relative_offset().y, 0.1);
        assert_eq!(vertical.relative_offset().x, 0.1);
        assert_eq!(vertical.relative_offset().y, 0.75);
    }
}
