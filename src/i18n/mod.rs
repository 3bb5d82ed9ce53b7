// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Artwork titles and years are string resources like every other label, so
//! switching locale re-labels the whole gallery.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded at compile time
//! - Fallback to the default locale when a key is missing

pub mod fluent;
