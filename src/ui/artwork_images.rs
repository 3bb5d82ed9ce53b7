// SPDX-License-Identifier: MPL-2.0
//! Embedded artwork images.
//!
//! The SVG sources under `assets/artworks/` are compiled into the binary and
//! handed to the view as cached `svg::Handle`s, so the gallery never touches
//! the file system.

use crate::domain::gallery::{Artwork, Catalog};
use crate::error::{Error, Result};
use iced::widget::svg::Handle;
use resvg::usvg;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/artworks/"]
struct ArtworkAsset;

fn cache() -> &'static HashMap<&'static str, Handle> {
    static HANDLES: OnceLock<HashMap<&'static str, Handle>> = OnceLock::new();
    HANDLES.get_or_init(|| {
        Catalog::classic()
            .iter()
            .filter_map(|artwork| {
                ArtworkAsset::get(artwork.image)
                    .map(|file| (artwork.image, Handle::from_memory(file.data)))
            })
            .collect()
    })
}

/// Returns the image handle for `artwork`.
///
/// # Errors
///
/// Returns [`Error::Asset`] if the image is not embedded in the binary.
pub fn handle(artwork: &Artwork) -> Result<Handle> {
    cache()
        .get(artwork.image)
        .cloned()
        .ok_or_else(|| Error::Asset(artwork.image.to_string()))
}

/// Checks that every catalog image is embedded and is a well-formed SVG.
///
/// # Errors
///
/// Returns the first [`Error::Asset`] encountered.
pub fn validate(catalog: &Catalog) -> Result<()> {
    for artwork in catalog.iter() {
        let file = ArtworkAsset::get(artwork.image)
            .ok_or_else(|| Error::Asset(artwork.image.to_string()))?;
        usvg::Tree::from_data(file.data.as_ref(), &usvg::Options::default())
            .map_err(|err| Error::Asset(format!("{}: {err}", artwork.image)))?;
    }
    Ok(())
}
