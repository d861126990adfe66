// SPDX-License-Identifier: MPL-2.0
//! Onboarding screen framed around the monthly loss.

use super::{card, centered, note, research, semibold, Message, ViewContext};
use crate::domain::money::format_inr;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::phone;
use crate::ui::styles::container::Tone;
use iced::widget::{Column, Container};
use iced::{Alignment, Element, Length};

/// Monthly amount the headline claims is lost to impulse spending.
const IMPULSE_LOSS: u32 = 15_000;

pub(super) fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let loss = format_inr(IMPULSE_LOSS);

    let message = Column::new()
        .spacing(ctx.size(spacing::MD, spacing::SM))
        .align_x(Alignment::Center)
        .push(
            centered(
                i18n.tr_with_args("onboarding-headline", &[("amount", loss.as_str())]),
                ctx.size(typography::TITLE_LG, typography::TITLE_MD),
            )
            .font(semibold())
            .color(palette::ERROR_600),
        )
        .push(
            centered(
                i18n.tr("onboarding-subheadline"),
                ctx.size(typography::TITLE_SM, typography::BODY_LG),
            )
            .color(palette::GRAY_500),
        )
        .push(note(
            i18n.tr("onboarding-social-proof"),
            Tone::Brand,
            typography::CAPTION,
        ))
        .push(research(i18n, "onboarding-research", Tone::Error));

    let content = Column::new()
        .push(
            Container::new(message)
                .width(Length::Fill)
                .center_y(Length::Fill),
        )
        .push(phone::page_dots(1));

    card(ctx, content.into(), ctx.size(450.0, 380.0))
}
