// SPDX-License-Identifier: MPL-2.0
//! Phone mock-up chrome shared by every frame.
//!
//! A frame is a caption row above a black bezel. Inside the bezel sits the
//! light screen: status bar, the frame's own content, and the home indicator.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::container as container_styles;
use crate::ui::viewport::LayoutMetrics;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment, Alignment, Element, Length};

/// Number of onboarding steps shown by the page indicator.
pub const PAGE_COUNT: usize = 3;

/// Wraps `body` in a captioned phone sized by `metrics`.
pub fn frame<'a, Message: 'static>(
    heading: String,
    time: String,
    metrics: LayoutMetrics,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let frame_size = metrics.frame();

    let caption = Container::new(Text::new(heading).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::FRAME_HEADING_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let screen_content = Column::new()
        .push(status_bar(time, &metrics))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(home_indicator(&metrics));

    let screen = Container::new(screen_content)
        .width(Length::Fixed(metrics.screen.width))
        .height(Length::Fixed(metrics.screen.height))
        .style(container_styles::screen(metrics.screen_radius))
        .clip(true);

    let bezel = Container::new(screen)
        .padding(metrics.bezel)
        .style(container_styles::bezel(metrics.bezel_radius));

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(frame_size.width))
        .height(Length::Fixed(frame_size.height))
        .align_x(Alignment::Center)
        .push(caption)
        .push(bezel)
        .into()
}

fn status_bar<'a, Message: 'static>(
    time: String,
    metrics: &LayoutMetrics,
) -> Element<'a, Message> {
    let size = if metrics.status_bar_height > sizing::STATUS_BAR_NARROW {
        typography::BODY
    } else {
        typography::CAPTION
    };

    let row = Row::new()
        .align_y(Alignment::Center)
        .push(Text::new(time).size(size))
        .push(Space::new().width(Length::Fill))
        .push(icons::sized(
            icons::battery(),
            sizing::BATTERY_WIDTH,
            sizing::BATTERY_HEIGHT,
        ));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(metrics.status_bar_height))
        .padding([0.0, metrics.screen_padding + spacing::XS])
        .align_y(alignment::Vertical::Center)
        .style(container_styles::status_bar)
        .into()
}

fn home_indicator<'a, Message: 'a>(metrics: &LayoutMetrics) -> Element<'a, Message> {
    let pill = Container::new(Space::new())
        .width(Length::Fixed(metrics.home_indicator_width))
        .height(Length::Fixed(sizing::HOME_INDICATOR_HEIGHT))
        .style(container_styles::home_indicator);

    Container::new(pill)
        .width(Length::Fill)
        .padding([spacing::XS, 0.0])
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Page indicator with the `active` dot (1-based) highlighted.
pub fn page_dots<'a, Message: 'a>(active: usize) -> Element<'a, Message> {
    let dots = (1..=PAGE_COUNT).fold(Row::new().spacing(spacing::XS), |row, page| {
        row.push(
            Container::new(Space::new())
                .width(Length::Fixed(sizing::PAGE_DOT))
                .height(Length::Fixed(sizing::PAGE_DOT))
                .style(container_styles::page_dot(page == active)),
        )
    });

    Container::new(dots)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewport::LayoutClass;

    #[derive(Debug, Clone)]
    enum Noop {}

    #[test]
    fn frame_renders_for_both_layouts() {
        for layout in [LayoutClass::Wide, LayoutClass::Narrow] {
            let body: Element<'_, Noop> = Text::new("body").into();
            let _element = frame("1. Home".into(), "9:41".into(), layout.metrics(), body);
        }
    }

    #[test]
    fn status_bar_renders_with_battery_icon() {
        for layout in [LayoutClass::Wide, LayoutClass::Narrow] {
            let _element: Element<'_, Noop> = status_bar("9:41".into(), &layout.metrics());
        }
    }

    #[test]
    fn page_dots_render_for_every_page() {
        for page in 1..=PAGE_COUNT {
            let _element: Element<'_, Noop> = page_dots(page);
        }
    }
}
