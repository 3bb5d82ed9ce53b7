// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: artwork image, title block and navigation buttons.
//!
//! Rendering is a pure projection of the catalog and the cursor. The screen
//! holds no state of its own; button presses are reported as [`Message`]s and
//! the application root applies them to its [`GalleryState`].

mod artwork_display;
mod artwork_title;
mod controls;

use crate::domain::gallery::{Artwork, Catalog, Direction, GalleryState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Space};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub state: &'a GalleryState,
    pub colors: &'a ColorScheme,
}

/// The two input events of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
}

impl Message {
    /// Cursor step requested by this message.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Message::Previous => Direction::Previous,
            Message::Next => Direction::Next,
        }
    }
}

/// Localized text shown under the artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub title: String,
    /// The year wrapped in dashes, e.g. `— 1889 —`.
    pub year_line: String,
}

impl Caption {
    #[must_use]
    pub fn for_artwork(i18n: &I18n, artwork: &Artwork) -> Self {
        let year = i18n.tr(artwork.year_key);
        Self {
            title: i18n.tr(artwork.title_key),
            year_line: i18n.tr_with_args("gallery-year-line", &[("year", &year)]),
        }
    }
}

/// Caption of the artwork currently under the cursor.
#[must_use]
pub fn current_caption(i18n: &I18n, catalog: &Catalog, state: &GalleryState) -> Caption {
    Caption::for_artwork(i18n, catalog.current(state))
}

/// Render the gallery screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let artwork = ctx.catalog.current(ctx.state);
    let caption = Caption::for_artwork(ctx.i18n, artwork);

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .push(artwork_display::view(ctx.i18n, artwork, ctx.colors))
        .push(Space::new().height(Length::Fixed(spacing::MD)))
        .push(artwork_title::view(caption, ctx.colors))
        .push(Space::new().height(Length::Fixed(spacing::LG)))
        .push(controls::view(ctx.i18n))
        .push(Space::new().height(Length::Fixed(spacing::LG)));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(ctx.colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn messages_map_to_directions() {
        assert_eq!(Message::Previous.direction(), Direction::Previous);
        assert_eq!(Message::Next.direction(), Direction::Next);
    }

    #[test]
    fn caption_matches_catalog_entry_at_every_index() {
        let i18n = english();
        let catalog = Catalog::classic();
        let mut state = GalleryState::for_catalog(&catalog);
        let expected = [
            ("Mona Lisa", "— 1503–1519 —"),
            ("The Starry Night", "— 1889 —"),
            ("Girl with a Pearl Earring", "— c. 1665 —"),
            ("The Birth of Venus", "— c. 1485 —"),
        ];

        for (index, (title, year_line)) in expected.iter().enumerate() {
            assert_eq!(state.index(), index);
            let caption = current_caption(&i18n, &catalog, &state);
            assert_eq!(caption.title, *title);
            assert_eq!(caption.year_line, *year_line);
            state.apply(Direction::Next);
        }
    }

    #[test]
    fn caption_is_idempotent_for_fixed_index() {
        let i18n = english();
        let catalog = Catalog::classic();
        let state = GalleryState::for_catalog(&catalog);
        assert_eq!(
            current_caption(&i18n, &catalog, &state),
            current_caption(&i18n, &catalog, &state)
        );
    }

    #[test]
    fn caption_follows_locale() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        let caption = Caption::for_artwork(&i18n, Catalog::classic().iter().next().unwrap());
        assert_eq!(caption.title, "La Joconde");
    }

    #[test]
    fn gallery_view_renders() {
        let i18n = english();
        let catalog = Catalog::classic();
        let state = GalleryState::for_catalog(&catalog);
        let colors = ColorScheme::dark();
        let _element = view(ViewContext {
            i18n: &i18n,
            catalog: &catalog,
            state: &state,
            colors: &colors,
        });
    }
}
