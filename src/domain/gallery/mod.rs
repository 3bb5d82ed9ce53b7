// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: the fixed artwork catalog and the cursor walking over it.
//!
//! The catalog is immutable for the lifetime of the process. The only mutable
//! piece of state is [`GalleryState`], which is moved exclusively through the
//! wrap-around transitions in [`cursor`].

pub mod artwork;
pub mod catalog;
pub mod cursor;

pub use artwork::{Artwork, ArtworkId};
pub use catalog::{Catalog, ARTWORK_COUNT};
pub use cursor::{advance, retreat, Direction, GalleryState};
