// SPDX-License-Identifier: MPL-2.0
//! Navigation banner pinned above the frames.
//!
//! Holds one button per frame and the behavioral insight of the selected
//! frame. Wide layouts label buttons "k. Title"; narrow ones show only the
//! number.

use crate::app::Frame;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewport::LayoutClass;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the banner.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selected: Frame,
    pub layout: LayoutClass,
}

/// Messages emitted by the banner.
#[derive(Debug, Clone)]
pub enum Message {
    SelectFrame(Frame),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Frame),
}

/// Process a banner message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::SelectFrame(frame) => Event::Navigate(frame),
    }
}

/// Label of the navigation button for `frame`.
#[must_use]
pub fn button_label(i18n: &I18n, frame: Frame, layout: LayoutClass) -> String {
    let index = frame.index().to_string();
    match layout {
        LayoutClass::Narrow => index,
        LayoutClass::Wide => {
            let title = i18n.tr(frame.title_key());
            i18n.tr_with_args(
                "nav-button-wide",
                &[("index", index.as_str()), ("title", title.as_str())],
            )
        }
    }
}

/// Render the navigation banner.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let narrow = ctx.layout.is_narrow();
    let metrics = ctx.layout.metrics();

    let subtitle = Text::new(ctx.i18n.tr("banner-subtitle"))
        .size(if narrow {
            typography::BODY_SM
        } else {
            typography::BODY
        })
        .width(Length::Fill)
        .center();

    let buttons = Frame::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, frame| {
            row.push(nav_button(&ctx, frame))
        });

    let insight = Container::new(
        Row::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(ctx.i18n.tr("banner-insight-label"))
                    .size(typography::CAPTION)
                    .font(Font {
                        weight: iced::font::Weight::Semibold,
                        ..Font::DEFAULT
                    }),
            )
            .push(
                Text::new(ctx.i18n.tr(ctx.selected.insight_key()))
                    .size(typography::CAPTION),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .align_x(Horizontal::Center)
    .style(styles::container::insight);

    let content = Column::new()
        .spacing(if narrow { spacing::XS } else { spacing::SM })
        .width(Length::Fill)
        .max_width(sizing::BANNER_MAX_WIDTH)
        .push(subtitle)
        .push(
            Container::new(buttons)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(insight);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(metrics.banner_height))
        .padding(if narrow { spacing::SM } else { spacing::MD })
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::chrome)
        .into()
}

fn nav_button<'a>(ctx: &ViewContext<'a>, frame: Frame) -> Element<'a, Message> {
    let size = if ctx.layout.is_narrow() {
        typography::CAPTION
    } else {
        typography::BODY_SM
    };

    button(Text::new(button_label(ctx.i18n, frame, ctx.layout)).size(size))
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::SelectFrame(frame))
        .style(styles::button::nav(frame == ctx.selected))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            selected: Frame::Home,
            layout: LayoutClass::Wide,
        };
        let _element = view(ctx);
    }

    #[test]
    fn banner_view_renders_narrow() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            selected: Frame::Success,
            layout: LayoutClass::Narrow,
        };
        let _element = view(ctx);
    }

    #[test]
    fn select_frame_emits_navigate() {
        for frame in Frame::ALL {
            assert_eq!(update(Message::SelectFrame(frame)), Event::Navigate(frame));
        }
    }

    #[test]
    fn wide_labels_include_title() {
        let i18n = I18n::default();
        assert_eq!(
            button_label(&i18n, Frame::Percentage, LayoutClass::Wide),
            "3. Percentage"
        );
    }

    #[test]
    fn narrow_labels_show_only_number() {
        let i18n = I18n::default();
        for frame in Frame::ALL {
            assert_eq!(
                button_label(&i18n, frame, LayoutClass::Narrow),
                frame.index().to_string()
            );
        }
    }
}
