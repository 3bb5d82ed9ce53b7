// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config file nor the OS provide a
/// supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels (portrait, phone-like proportions).
pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;

/// Initial window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;

/// Smallest window width that still fits both navigation buttons.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Smallest window height that still fits the title block and buttons.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

const _: () = {
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
