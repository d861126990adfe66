// SPDX-License-Identifier: MPL-2.0
//! Percentage selection screen: the savings slider and its live preview.

use super::{card, centered, research, semibold, Message, ViewContext};
use crate::app::Frame;
use crate::domain::money::format_inr;
use crate::domain::savings::SavingsPercent;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::phone;
use crate::ui::styles::container::Tone;
use crate::ui::styles::slider as slider_styles;
use iced::widget::{slider, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length};

pub(super) fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let recommended = SavingsPercent::default().to_string();
    let save = format_inr(ctx.split.save);
    let spend = format_inr(ctx.split.spend);

    let title = Column::new()
        .spacing(spacing::XS)
        .push(
            centered(
                i18n.tr("percentage-headline"),
                ctx.size(typography::TITLE_MD, typography::TITLE_SM),
            )
            .font(semibold())
            .color(palette::GRAY_800),
        )
        .push(
            centered(
                i18n.tr_with_args(
                    "percentage-recommendation",
                    &[("percent", recommended.as_str())],
                ),
                ctx.size(typography::BODY, typography::BODY_SM),
            )
            .font(Font {
                weight: iced::font::Weight::Medium,
                ..Font::DEFAULT
            })
            .color(palette::PRIMARY_600),
        );

    let rate = slider(
        SavingsPercent::MIN.value()..=SavingsPercent::MAX.value(),
        ctx.percent.value(),
        Message::PercentChanged,
    )
    .step(1u8)
    .style(slider_styles::savings);

    let bounds = Row::new()
        .push(
            Text::new(SavingsPercent::MIN.to_string())
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(SavingsPercent::MAX.to_string())
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        );

    let picker = Container::new(Column::new().spacing(spacing::XS).push(rate).push(bounds))
        .width(Length::Fill)
        .padding([ctx.size(spacing::LG, spacing::MD), spacing::XS]);

    let preview = Column::new()
        .spacing(spacing::XS)
        .push(
            centered(
                i18n.tr_with_args("percentage-save-preview", &[("amount", save.as_str())]),
                ctx.size(typography::BODY_LG, typography::BODY),
            )
            .font(Font {
                weight: iced::font::Weight::Medium,
                ..Font::DEFAULT
            })
            .color(palette::GRAY_800),
        )
        .push(
            centered(
                i18n.tr_with_args("percentage-spend-preview", &[("amount", spend.as_str())]),
                ctx.size(typography::BODY, typography::CAPTION),
            )
            .color(palette::GRAY_500),
        );

    let content = Column::new()
        .push(
            Column::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .spacing(ctx.size(spacing::LG, spacing::MD))
                .push(title)
                .push(picker)
                .push(preview)
                .push(research(i18n, Frame::Percentage.insight_key(), Tone::Brand)),
        )
        .push(phone::page_dots(2));

    card(ctx, content.into(), ctx.size(480.0, 420.0))
}
