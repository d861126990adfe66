// SPDX-License-Identifier: MPL-2.0
//! Biometric confirmation screen.
//!
//! The fingerprint button is the one hard-wired transition in the flow: it
//! always leads to the success screen.

use super::{card, centered, note, research, semibold, Message, ViewContext};
use crate::app::Frame;
use crate::domain::money::format_inr;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::phone;
use crate::ui::styles::button as button_styles;
use crate::ui::styles::container::Tone;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Alignment, Element, Font, Length};

const LOCK: &str = "🔒";

pub(super) fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let percent = ctx.percent.to_string();
    let save = format_inr(ctx.split.save);

    let commitment = Column::new()
        .spacing(spacing::XS)
        .push(
            centered(
                i18n.tr("confirmation-commitment"),
                ctx.size(typography::BODY_LG, typography::BODY),
            )
            .color(palette::GRAY_500),
        )
        .push(
            centered(
                i18n.tr_with_args(
                    "confirmation-commitment-amount",
                    &[("percent", percent.as_str()), ("amount", save.as_str())],
                ),
                ctx.size(typography::BODY_LG, typography::BODY),
            )
            .font(semibold())
            .color(palette::GRAY_800),
        )
        .push(note(
            i18n.tr("confirmation-impact"),
            Tone::Success,
            typography::CAPTION,
        ));

    let reassurance = Column::new()
        .spacing(spacing::XXS)
        .push(
            centered(
                i18n.tr("confirmation-pause"),
                ctx.size(typography::BODY, typography::BODY_SM),
            )
            .font(Font {
                weight: iced::font::Weight::Medium,
                ..Font::DEFAULT
            })
            .color(palette::SUCCESS_600),
        )
        .push(
            centered(i18n.tr("confirmation-retention"), typography::CAPTION)
                .color(palette::GRAY_500),
        );

    let confirm = button(
        Container::new(
            Text::new(i18n.tr("confirmation-button"))
                .size(ctx.size(typography::BODY_LG, typography::BODY))
                .font(semibold()),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(ctx.size(280.0, 240.0)))
    .height(Length::Fixed(ctx.size(sizing::BUTTON_HEIGHT + 4.0, sizing::BUTTON_HEIGHT - 4.0)))
    .on_press(Message::ConfirmFingerprint)
    .style(button_styles::confirm);

    let body = Column::new()
        .width(Length::Fill)
        .spacing(ctx.size(spacing::LG, spacing::MD))
        .align_x(Alignment::Center)
        .push(Text::new(LOCK).size(ctx.size(48.0, 40.0)))
        .push(
            centered(
                i18n.tr("confirmation-headline"),
                ctx.size(22.0, typography::TITLE_SM),
            )
            .font(semibold())
            .color(palette::GRAY_800),
        )
        .push(commitment)
        .push(reassurance)
        .push(confirm)
        .push(
            centered(i18n.tr("confirmation-security"), typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let content = Column::new()
        .spacing(ctx.size(spacing::MD, spacing::SM))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .center_y(Length::Fill),
        )
        .push(research(i18n, Frame::Confirmation.insight_key(), Tone::Purple))
        .push(phone::page_dots(3));

    card(ctx, content.into(), ctx.size(520.0, 460.0))
}
