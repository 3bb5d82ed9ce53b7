// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Artwork catalog ([`Catalog`](gallery::Catalog),
//!   [`Artwork`](gallery::Artwork)) and cursor state
//!   ([`GalleryState`](gallery::GalleryState), [`Direction`](gallery::Direction))

pub mod gallery;
