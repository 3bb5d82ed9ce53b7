// SPDX-License-Identifier: MPL-2.0
//! Artwork records.
//!
//! A record does not own any display strings. Titles and years are Fluent
//! message ids resolved through the active locale at render time, and the
//! image is the name of an embedded SVG asset.

use std::fmt;

/// Stable identity of each artwork in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtworkId {
    MonaLisa,
    StarryNight,
    GirlWithAPearlEarring,
    BirthOfVenus,
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            ArtworkId::MonaLisa => "mona-lisa",
            ArtworkId::StarryNight => "starry-night",
            ArtworkId::GirlWithAPearlEarring => "girl-with-pearl-earring",
            ArtworkId::BirthOfVenus => "birth-of-venus",
        };
        f.write_str(slug)
    }
}

/// One immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork {
    pub id: ArtworkId,
    /// File name of the embedded SVG under `assets/artworks/`.
    pub image: &'static str,
    /// Fluent message id of the artwork title.
    pub title_key: &'static str,
    /// Fluent message id of the creation year (or period).
    pub year_key: &'static str,
}

impl Artwork {
    #[must_use]
    pub const fn new(
        id: ArtworkId,
        image: &'static str,
        title_key: &'static str,
        year_key: &'static str,
    ) -> Self {
        Self {
            id,
            image,
            title_key,
            year_key,
        }
    }
}
