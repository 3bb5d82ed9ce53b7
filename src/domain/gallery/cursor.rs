// SPDX-License-Identifier: MPL-2.0
//! Cursor over the artwork catalog.
//!
//! The cursor moves by one position at a time and wraps around both ends:
//! stepping forward from the last artwork lands on the first one, and
//! stepping backward from the first lands on the last.

use super::catalog::Catalog;
use std::num::NonZeroUsize;

/// Direction of a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Step to the next artwork.
    Next,
    /// Step to the previous artwork.
    Previous,
}

/// Index following `index` in a sequence of `len` items, wrapping to `0`.
#[must_use]
pub fn advance(index: usize, len: NonZeroUsize) -> usize {
    let len = len.get();
    (index % len + 1) % len
}

/// Index preceding `index` in a sequence of `len` items, wrapping to `len - 1`.
#[must_use]
pub fn retreat(index: usize, len: NonZeroUsize) -> usize {
    let len = len.get();
    match index % len {
        0 => len - 1,
        i => i - 1,
    }
}

/// The currently displayed position in the catalog.
///
/// Only obtainable from a [`Catalog`]. Starts at `0` and only changes through
/// [`GalleryState::apply`], so the index is always strictly below the catalog
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryState {
    index: usize,
    len: NonZeroUsize,
}

impl GalleryState {
    /// Creates a cursor at the first artwork of `catalog`.
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            index: 0,
            len: catalog.len(),
        }
    }

    /// Current position.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of positions the cursor cycles through.
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    /// Moves one step in `direction` and returns the new index.
    pub fn apply(&mut self, direction: Direction) -> usize {
        self.index = match direction {
            Direction::Next => advance(self.index, self.len),
            Direction::Previous => retreat(self.index, self.len),
        };
        self.index
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::for_catalog(&Catalog::classic())
    }
}
