// SPDX-License-Identifier: MPL-2.0
//! Image area of the gallery.

use super::Message;
use crate::domain::gallery::Artwork;
use crate::i18n::fluent::I18n;
use crate::ui::artwork_images;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{svg::Svg, Container, Text};
use iced::{ContentFit, Element, Length};

/// Artwork scaled to the available space, or a text placeholder when the
/// embedded image cannot be resolved.
pub fn view<'a>(i18n: &I18n, artwork: &Artwork, colors: &ColorScheme) -> Element<'a, Message> {
    let content: Element<'a, Message> = match artwork_images::handle(artwork) {
        Ok(handle) => Svg::new(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        Err(err) => {
            tracing::warn!(artwork = %artwork.id, error = %err, "artwork image unavailable");
            Text::new(i18n.tr(err.i18n_key()))
                .size(typography::BODY)
                .color(colors.error)
                .into()
        }
    };

    let framed = Container::new(content)
        .padding(spacing::XS)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::artwork_frame(colors))
        .clip(true);

    Container::new(framed)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}
