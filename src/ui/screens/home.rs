// SPDX-License-Identifier: MPL-2.0
//! Home screen with the personalized Salary Guard banner.

use super::{centered, note, research, semibold, Message, ViewContext};
use crate::app::Frame;
use crate::domain::money::format_inr;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::container::{self as container_styles, Tone};
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Element, Length};

const TRANSACTIONS: [(&str, u32); 3] = [
    ("home-transaction-swiggy", 450),
    ("home-transaction-amazon", 1_299),
    ("home-transaction-upi", 2_000),
];

pub(super) fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let hero = Container::new(
        Column::new()
            .spacing(ctx.size(spacing::XS, spacing::XXS))
            .push(
                centered(
                    i18n.tr_with_args("home-banner-title", &[("name", ctx.display_name)]),
                    ctx.size(typography::BODY_LG, typography::BODY),
                )
                .font(semibold()),
            )
            .push(centered(
                i18n.tr("home-banner-subtitle"),
                ctx.size(typography::BODY, typography::CAPTION),
            )),
    )
    .width(Length::Fill)
    .padding(ctx.size(spacing::MD, spacing::SM))
    .style(container_styles::hero);

    let balance = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(i18n.tr("home-balance-label"))
                    .size(ctx.size(typography::BODY, typography::CAPTION))
                    .color(palette::GRAY_600),
            )
            .push(
                Text::new(i18n.tr("home-balance-amount"))
                    .size(ctx.size(typography::TITLE_LG, typography::TITLE_MD))
                    .font(semibold()),
            ),
    )
    .width(Length::Fill)
    .padding(ctx.size(spacing::MD, spacing::SM))
    .style(container_styles::surface);

    let rows = TRANSACTIONS.iter().fold(
        Column::new().spacing(ctx.size(spacing::XS, spacing::XXS)),
        |column, (key, amount)| {
            let amount = format_inr(*amount);
            column.push(
                Row::new()
                    .push(
                        Text::new(i18n.tr(key))
                            .size(ctx.size(typography::BODY, typography::CAPTION)),
                    )
                    .push(Space::new().width(Length::Fill))
                    .push(
                        Text::new(i18n.tr_with_args(
                            "home-transaction-amount",
                            &[("amount", amount.as_str())],
                        ))
                        .size(ctx.size(typography::BODY, typography::CAPTION))
                        .color(palette::ERROR_500),
                    ),
            )
        },
    );

    let transactions = Container::new(
        Column::new()
            .spacing(ctx.size(spacing::XS, spacing::XXS))
            .push(
                Text::new(i18n.tr("home-transactions-label"))
                    .size(ctx.size(typography::BODY, typography::CAPTION))
                    .color(palette::GRAY_600),
            )
            .push(rows),
    )
    .width(Length::Fill)
    .padding(ctx.size(spacing::MD, spacing::SM))
    .style(container_styles::surface);

    Column::new()
        .padding(ctx.metrics().screen_padding)
        .spacing(ctx.size(spacing::MD, spacing::SM))
        .push(hero)
        .push(note(
            i18n.tr("home-differentiator"),
            Tone::Success,
            typography::CAPTION,
        ))
        .push(research(i18n, Frame::Home.insight_key(), Tone::Brand))
        .push(balance)
        .push(transactions)
        .into()
}
