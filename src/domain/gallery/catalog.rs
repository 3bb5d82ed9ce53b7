// SPDX-License-Identifier: MPL-2.0
//! The fixed artwork catalog.
//!
//! The catalog is a `static` array literal, so its length is known at compile
//! time and can never be zero. [`Catalog::len`] hands that length out as a
//! [`NonZeroUsize`], which is what the cursor transitions require.

use super::artwork::{Artwork, ArtworkId};
use super::cursor::GalleryState;
use std::num::NonZeroUsize;

/// Number of artworks shipped with the gallery.
pub const ARTWORK_COUNT: usize = 4;

const CATALOG_LEN: NonZeroUsize = match NonZeroUsize::new(ARTWORK_COUNT) {
    Some(len) => len,
    None => panic!("the artwork catalog cannot be empty"),
};

static ARTWORKS: [Artwork; ARTWORK_COUNT] = [
    Artwork::new(
        ArtworkId::MonaLisa,
        "mona_lisa.svg",
        "artwork-mona-lisa",
        "artwork-mona-lisa-year",
    ),
    Artwork::new(
        ArtworkId::StarryNight,
        "starry_night.svg",
        "artwork-starry-night",
        "artwork-starry-night-year",
    ),
    Artwork::new(
        ArtworkId::GirlWithAPearlEarring,
        "girl_with_pearl_earring.svg",
        "artwork-girl-with-pearl-earring",
        "artwork-girl-with-pearl-earring-year",
    ),
    Artwork::new(
        ArtworkId::BirthOfVenus,
        "birth_of_venus.svg",
        "artwork-birth-of-venus",
        "artwork-birth-of-venus-year",
    ),
];

/// Ordered, immutable view over the classic artworks.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    artworks: &'static [Artwork; ARTWORK_COUNT],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::classic()
    }
}

impl Catalog {
    /// The four classic paintings, in display order.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            artworks: &ARTWORKS,
        }
    }

    /// Number of entries. Never zero.
    #[must_use]
    pub const fn len(&self) -> NonZeroUsize {
        CATALOG_LEN
    }

    /// Returns the artwork the cursor points at.
    ///
    /// `GalleryState` is only built from a catalog and only moves through
    /// wrap-around steps, so its index is always in range.
    #[must_use]
    pub fn current(&self, state: &GalleryState) -> &'static Artwork {
        &self.artworks[state.index()]
    }

    /// Iterates over all artworks in display order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Artwork> {
        self.artworks.iter()
    }
}
