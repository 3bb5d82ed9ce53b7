// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::gallery::{Catalog, GalleryState};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::AppTheme;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub gallery: &'a GalleryState,
    pub theme: &'a AppTheme,
}

/// Renders the gallery screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        catalog: ctx.catalog,
        state: ctx.gallery,
        colors: &ctx.theme.colors,
    })
    .map(Message::Gallery)
}
