// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`gallery`] - The gallery screen (artwork, title block, navigation buttons)
//! - [`artwork_images`] - Embedded artwork SVGs as image handles
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod artwork_images;
pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
