// SPDX-License-Identifier: MPL-2.0
//! The five phone screens of the savings-setup flow.
//!
//! Each screen renders only the content below the status bar;
//! [`phone::frame`] adds the caption, bezel, and chrome around it.

mod confirmation;
mod home;
mod onboarding;
mod percentage;
mod success;

use crate::app::Frame;
use crate::domain::savings::{SavingsPercent, SavingsSplit};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::phone;
use crate::ui::styles::container::{self as container_styles, Tone};
use crate::ui::viewport::{LayoutClass, LayoutMetrics};
use iced::widget::{Container, Text};
use iced::{Element, Font, Length};

/// Contextual data needed to render a screen.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub display_name: &'a str,
    pub percent: SavingsPercent,
    pub split: SavingsSplit,
    pub layout: LayoutClass,
}

impl ViewContext<'_> {
    #[must_use]
    pub fn metrics(&self) -> LayoutMetrics {
        self.layout.metrics()
    }

    /// Picks the wide or narrow variant of a size.
    #[must_use]
    pub fn size(&self, wide: f32, narrow: f32) -> f32 {
        if self.layout.is_narrow() {
            narrow
        } else {
            wide
        }
    }
}

/// Messages emitted by the interactive screens.
#[derive(Debug, Clone)]
pub enum Message {
    PercentChanged(u8),
    ConfirmFingerprint,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SavingsChanged(SavingsPercent),
    Confirmed,
}

/// Process a screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::PercentChanged(value) => Event::SavingsChanged(SavingsPercent::new(*value)),
        Message::ConfirmFingerprint => Event::Confirmed,
    }
}

/// Renders `frame` inside its phone.
pub fn view<'a>(frame: Frame, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body = match frame {
        Frame::Home => home::view(ctx),
        Frame::Onboarding => onboarding::view(ctx),
        Frame::Percentage => percentage::view(ctx),
        Frame::Confirmation => confirmation::view(ctx),
        Frame::Success => success::view(ctx),
    };

    phone::frame(
        ctx.i18n.tr(frame.heading_key()),
        ctx.i18n.tr("status-bar-time"),
        ctx.metrics(),
        body,
    )
}

/// Centered text of the given size.
fn centered<'a>(content: String, size: f32) -> Text<'a> {
    Text::new(content).size(size).width(Length::Fill).center()
}

/// Semibold variant of the default font.
fn semibold() -> Font {
    Font {
        weight: iced::font::Weight::Semibold,
        ..Font::DEFAULT
    }
}

/// Tinted note box with centered text.
fn note<'a>(content: String, tone: Tone, size: f32) -> Element<'a, Message> {
    Container::new(centered(content, size).color(tone.text()))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(container_styles::note(tone))
        .into()
}

/// Floating card of the given height, centered in the screen.
fn card<'a>(
    ctx: ViewContext<'a>,
    content: Element<'a, Message>,
    height: f32,
) -> Element<'a, Message> {
    let metrics = ctx.metrics();
    let card = Container::new(content)
        .width(Length::Fixed(metrics.card_width))
        .height(Length::Fixed(height))
        .padding([
            ctx.size(spacing::XL, spacing::LG),
            ctx.size(spacing::LG, spacing::MD),
        ])
        .style(container_styles::card);

    Container::new(card)
        .padding([0.0, metrics.screen_padding])
        .center(Length::Fill)
        .into()
}

/// Italic research footnote.
fn research<'a>(i18n: &I18n, key: &str, tone: Tone) -> Element<'a, Message> {
    let note = i18n.tr(key);
    let content = i18n.tr_with_args("research-note", &[("note", note.as_str())]);
    Container::new(
        centered(content, typography::FOOTNOTE)
            .color(tone.text())
            .font(Font {
                style: iced::font::Style::Italic,
                ..Font::DEFAULT
            }),
    )
    .width(Length::Fill)
    .padding(spacing::XXS)
    .style(container_styles::note(tone))
    .into()
}
