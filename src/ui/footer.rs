// SPDX-License-Identifier: MPL-2.0
//! Business metrics footer.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Text},
    Element, Font, Length,
};

/// (value key, label key) of each metric, in display order.
const METRICS: [(&str, &str); 4] = [
    ("metric-retention", "footer-retention"),
    ("metric-revenue", "footer-revenue"),
    ("metric-conversion", "footer-conversion"),
    ("metric-ltv", "footer-ltv"),
];

/// Render the footer. It emits no messages.
pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let row = METRICS
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, (value, label)| {
            row.push(
                Column::new()
                    .width(Length::Fill)
                    .align_x(Horizontal::Center)
                    .push(
                        Text::new(i18n.tr(value))
                            .size(typography::BODY_LG)
                            .font(Font {
                                weight: iced::font::Weight::Bold,
                                ..Font::DEFAULT
                            }),
                    )
                    .push(Text::new(i18n.tr(label)).size(typography::FOOTNOTE)),
            )
        });

    Container::new(Container::new(row).max_width(sizing::BANNER_MAX_WIDTH))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::FOOTER_HEIGHT))
        .padding([spacing::SM, spacing::MD])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::chrome)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum Noop {}

    #[test]
    fn footer_view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, Noop> = view(&i18n);
    }

    #[test]
    fn every_metric_has_copy() {
        let i18n = I18n::default();
        for (value, label) in METRICS {
            assert!(!i18n.tr(value).starts_with("MISSING"));
            assert!(!i18n.tr(label).starts_with("MISSING"));
        }
    }
}
