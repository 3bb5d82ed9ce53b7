// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a single-screen gallery built with the Iced GUI framework.
//!
//! It cycles through four classic paintings with "Previous" and "Next"
//! buttons while the title and year of the current artwork update. The whole
//! gallery state is one cursor into a fixed catalog, updated through an
//! explicit reducer ([`domain::gallery::GalleryState::apply`]).

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
