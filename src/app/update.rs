// SPDX-License-Identifier: MPL-2.0
//! Update logic: the only mutation in the application is the gallery cursor.

use super::Message;
use crate::domain::gallery::{Catalog, GalleryState};
use crate::ui::gallery;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub catalog: &'a Catalog,
    pub gallery: &'a mut GalleryState,
}

/// Applies one gallery event to the cursor.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let direction = message.direction();
    let index = ctx.gallery.apply(direction);
    tracing::debug!(
        ?direction,
        index,
        artwork = %ctx.catalog.current(ctx.gallery).id,
        "gallery cursor moved"
    );
    Task::none()
}
