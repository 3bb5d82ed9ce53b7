// SPDX-License-Identifier: MPL-2.0
//! Title block: bold title line over a `— year —` subtitle.

use super::{Caption, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::font::Weight;
use iced::widget::{Column, Text};
use iced::{Alignment, Element, Font};

pub fn view<'a>(caption: Caption, colors: &ColorScheme) -> Element<'a, Message> {
    let title = Text::new(caption.title)
        .size(typography::TITLE_XL)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .color(colors.title_text)
        .center();

    let year = Text::new(caption.year_line)
        .size(typography::BODY_LG)
        .font(Font {
            weight: Weight::Medium,
            ..Font::default()
        })
        .color(colors.year_text)
        .center();

    Column::new()
        .spacing(spacing::XXS)
        .padding([0.0, spacing::MD])
        .align_x(Alignment::Center)
        .push(title)
        .push(year)
        .into()
}
