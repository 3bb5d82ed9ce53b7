// SPDX-License-Identifier: MPL-2.0
//! "Previous" / "Next" button row.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, text, Row};
use iced::{alignment::Vertical, Element, Font, Length};

fn nav_button<'a>(
    label: String,
    message: Message,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    button(
        text(label)
            .size(typography::BODY_LG)
            .font(Font {
                weight: Weight::Medium,
                ..Font::default()
            })
            .center(),
    )
    .on_press(message)
    .style(style)
    .width(Length::Fixed(sizing::NAV_BUTTON_MIN_WIDTH))
    .height(Length::Fixed(sizing::NAV_BUTTON_HEIGHT))
    .padding([spacing::XS, spacing::MD])
    .into()
}

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .push(nav_button(
            i18n.tr("gallery-previous-button"),
            Message::Previous,
            styles::button::previous,
        ))
        .push(nav_button(
            i18n.tr("gallery-next-button"),
            Message::Next,
            styles::button::next,
        ))
        .into()
}
