// SPDX-License-Identifier: MPL-2.0
//! Success screen: celebration, emergency fund progress, and fitness score.

use super::{card, centered, note, research, semibold, Message, ViewContext};
use crate::app::Frame;
use crate::domain::money::format_inr;
use crate::domain::savings::{SavingsSplit, MONTHLY_SALARY};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::container::{self as container_styles, Tone};
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Font, Length};

const CELEBRATION: &str = "🎉";

pub(super) fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let save = format_inr(ctx.split.save);
    let goal = format_inr(MONTHLY_SALARY);
    let medium = Font {
        weight: iced::font::Weight::Medium,
        ..Font::DEFAULT
    };

    let celebration = Column::new()
        .spacing(ctx.size(spacing::MD, spacing::SM))
        .align_x(Alignment::Center)
        .push(Text::new(CELEBRATION).size(ctx.size(56.0, 48.0)))
        .push(
            centered(
                i18n.tr("success-headline"),
                ctx.size(typography::TITLE_LG, typography::TITLE_MD),
            )
            .font(semibold())
            .color(palette::SUCCESS_600),
        )
        .push(
            centered(
                i18n.tr_with_args("success-message", &[("amount", save.as_str())]),
                ctx.size(typography::BODY_LG, typography::BODY),
            )
            .color(palette::GRAY_500),
        )
        .push(note(
            i18n.tr("success-notifications"),
            Tone::Brand,
            typography::CAPTION,
        ));

    let fund = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .align_y(Alignment::Center)
                .push(
                    Text::new(i18n.tr("success-fund-label"))
                        .size(ctx.size(typography::BODY, typography::BODY_SM))
                        .font(medium)
                        .color(palette::GRAY_800),
                )
                .push(Space::new().width(Length::Fill))
                .push(
                    Text::new(i18n.tr_with_args(
                        "success-fund-progress",
                        &[("saved", save.as_str()), ("goal", goal.as_str())],
                    ))
                    .size(typography::CAPTION)
                    .font(medium)
                    .color(palette::SUCCESS_600),
                ),
        )
        .push(progress_bar(ctx.split));

    let score = Column::new()
        .spacing(spacing::XS)
        .align_x(Alignment::Center)
        .push(
            Text::new(i18n.tr("success-score-label"))
                .size(ctx.size(typography::BODY, typography::BODY_SM))
                .font(medium)
                .color(palette::GRAY_800),
        )
        .push(
            Text::new(i18n.tr("success-score-value"))
                .size(ctx.size(32.0, 28.0))
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::DEFAULT
                })
                .color(palette::PRIMARY_600),
        )
        .push(
            centered(i18n.tr("success-score-note"), typography::CAPTION)
                .color(palette::GRAY_500),
        )
        .push(note(
            i18n.tr("success-score-goal"),
            Tone::Warning,
            typography::FOOTNOTE,
        ));

    let retention = Container::new(
        centered(i18n.tr("success-retention"), typography::CAPTION).font(medium),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(container_styles::badge);

    let pause = Column::new()
        .spacing(spacing::XXS)
        .push(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(1.0))
                .style(container_styles::divider),
        )
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(
            centered(
                i18n.tr("success-pause"),
                ctx.size(typography::BODY, typography::BODY_SM),
            )
            .color(palette::ERROR_600),
        )
        .push(
            centered(i18n.tr("success-cooling-off"), typography::FOOTNOTE)
                .color(palette::GRAY_500),
        );

    let content = Column::new()
        .spacing(ctx.size(spacing::MD, spacing::SM))
        .push(celebration)
        .push(fund)
        .push(score)
        .push(retention)
        .push(Space::new().height(Length::Fill))
        .push(pause)
        .push(research(i18n, Frame::Success.insight_key(), Tone::Success));

    card(ctx, content.into(), ctx.size(600.0, 520.0))
}

/// Emergency fund bar filled to `save / salary`.
fn progress_bar<'a>(split: SavingsSplit) -> Element<'a, Message> {
    let filled = u16::try_from(split.save).unwrap_or(u16::MAX);
    let remaining = u16::try_from(split.spend).unwrap_or(u16::MAX);

    let bar = Row::new()
        .push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(container_styles::progress_fill),
        )
        .push(
            Container::new(Space::new())
                .width(Length::FillPortion(remaining))
                .height(Length::Fill),
        );

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
        .style(container_styles::progress_track)
        .into()
}
