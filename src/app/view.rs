// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a fixed banner, the scrolling strip of five phones, and a
//! fixed footer. Wide layouts lay the phones out in a row; narrow ones stack
//! them in a column.

use super::{Frame, Message};
use crate::domain::savings::{SavingsPercent, SavingsSplit};
use crate::i18n::fluent::I18n;
use crate::ui::styles::container as container_styles;
use crate::ui::viewport::LayoutClass;
use crate::ui::{banner, footer, screens};
use iced::{
    widget::scrollable::{Direction, Scrollbar, Viewport},
    widget::{Column, Container, Id, Row, Scrollable},
    Alignment, Element, Length,
};

/// Widget id of the frame strip, targeted by scroll operations.
pub const FRAMES_SCROLLABLE_ID: &str = "salary-guard-frames";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub display_name: &'a str,
    pub selected: Frame,
    pub percent: SavingsPercent,
    pub layout: LayoutClass,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let banner = banner::view(banner::ViewContext {
        i18n: ctx.i18n,
        selected: ctx.selected,
        layout: ctx.layout,
    })
    .map(Message::Banner);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(banner)
        .push(frames(&ctx))
        .push(footer::view(ctx.i18n))
        .into()
}

fn frames<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let screen_ctx = screens::ViewContext {
        i18n: ctx.i18n,
        display_name: ctx.display_name,
        percent: ctx.percent,
        split: SavingsSplit::at(ctx.percent),
        layout: ctx.layout,
    };
    let metrics = ctx.layout.metrics();

    let phones = Frame::ALL
        .into_iter()
        .map(|frame| screens::view(frame, screen_ctx).map(Message::Screen));

    let strip: Element<'a, Message> = match ctx.layout {
        LayoutClass::Wide => Row::with_children(phones)
            .spacing(metrics.frame_gap)
            .padding(metrics.content_padding)
            .into(),
        LayoutClass::Narrow => Column::with_children(phones)
            .spacing(metrics.frame_gap)
            .padding(metrics.content_padding)
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .into(),
    };

    let scrollable = match ctx.layout {
        LayoutClass::Wide => Scrollable::new(strip)
            .direction(Direction::Both {
                vertical: Scrollbar::new(),
                horizontal: Scrollbar::new(),
            })
            .on_scroll(|viewport: Viewport| Message::FramesScrolled {
                offset: viewport.absolute_offset().x,
                cross: viewport.relative_offset().y,
            }),
        LayoutClass::Narrow => Scrollable::new(strip)
            .direction(Direction::Vertical(Scrollbar::new()))
            .on_scroll(|viewport: Viewport| Message::FramesScrolled {
                offset: viewport.absolute_offset().y,
                cross: 0.0,
            }),
    };

    Container::new(
        scrollable
            .id(Id::new(FRAMES_SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::desk)
    .into()
}
