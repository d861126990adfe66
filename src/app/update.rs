// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each top-level message maps to exactly one handler here. Handlers only see
//! the parts of the state they may change, through [`UpdateContext`].

use super::view::FRAMES_SCROLLABLE_ID;
use super::{Frame, Message};
use crate::domain::savings::{SavingsPercent, SavingsSplit};
use crate::ui::banner::{self, Event as BannerEvent};
use crate::ui::navigator::{FrameNavigator, ScrollGeometry};
use crate::ui::screens::{self, Event as ScreenEvent};
use crate::ui::viewport::ViewportClassifier;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::time::Instant;

/// Mutable view state handed to the handlers.
pub struct UpdateContext<'a> {
    pub savings: &'a mut SavingsPercent,
    pub viewport: &'a mut ViewportClassifier,
    pub navigator: &'a mut FrameNavigator,
}

impl UpdateContext<'_> {
    /// Scroll geometry of the current layout, once the window size is known.
    fn geometry(&self) -> Option<ScrollGeometry> {
        self.viewport
            .window()
            .map(|size| ScrollGeometry::new(self.viewport.layout(), size))
    }
}

pub fn handle_banner_message(
    ctx: &mut UpdateContext<'_>,
    message: banner::Message,
) -> Task<Message> {
    match banner::update(message) {
        BannerEvent::Navigate(frame) => navigate(ctx, frame),
    }
}

pub fn handle_screen_message(
    ctx: &mut UpdateContext<'_>,
    message: screens::Message,
) -> Task<Message> {
    match screens::update(&message) {
        ScreenEvent::SavingsChanged(percent) => {
            *ctx.savings = percent;
            let split = SavingsSplit::at(percent);
            tracing::debug!(
                %percent,
                save = split.save,
                spend = split.spend,
                "savings rate changed"
            );
            Task::none()
        }
        ScreenEvent::Confirmed => navigate(ctx, Frame::Success),
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    if ctx.viewport.observe(size) {
        tracing::debug!(
            width = size.width,
            layout = ?ctx.viewport.layout(),
            "layout class changed"
        );
        ctx.navigator.reset_scroll();
        operation::snap_to(Id::new(FRAMES_SCROLLABLE_ID), RelativeOffset::START)
    } else {
        Task::none()
    }
}

pub fn handle_frames_scrolled(
    ctx: &mut UpdateContext<'_>,
    offset: f32,
    cross: f32,
) -> Task<Message> {
    ctx.navigator.scrolled(offset, cross);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let geometry = ctx.geometry();
    match ctx.navigator.step(now, geometry) {
        Some(step) => operation::snap_to(Id::new(FRAMES_SCROLLABLE_ID), step.relative_offset()),
        None => Task::none(),
    }
}

fn navigate(ctx: &mut UpdateContext<'_>, frame: Frame) -> Task<Message> {
    let geometry = ctx.geometry();
    let scrolling = ctx.navigator.navigate(frame, geometry, Instant::now());

    if scrolling {
        tracing::debug!(frame = frame.index(), "navigating");
    } else {
        tracing::debug!(frame = frame.index(), "scroll target not mounted, selection only");
    }
    Task::none()
}
