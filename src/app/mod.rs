// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the localization bundles, the resolved theme, the
//! immutable artwork catalog and the gallery cursor. Messages from buttons or
//! the keyboard are turned into cursor steps; everything else is a pure
//! projection of that state.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::gallery_message_for_key;

use crate::config::{
    self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::domain::gallery::{Catalog, GalleryState};
use crate::i18n::fluent::I18n;
use crate::ui::artwork_images;
use crate::ui::gallery;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    gallery: GalleryState,
    theme: AppTheme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery", &self.gallery)
            .field("locale", self.i18n.current_locale())
            .field("theme_mode", &self.theme.mode)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires an `Fn` boot closure; flags are cloned per call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let catalog = Catalog::classic();
        Self {
            i18n: I18n::default(),
            catalog,
            gallery: GalleryState::for_catalog(&catalog),
            theme: AppTheme::default(),
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    /// The gallery always starts at the first artwork.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        if let Some(key) = config_warning {
            tracing::warn!(warning = %key, "{}", i18n.tr(&key));
        }

        let theme = AppTheme::new(config.general.theme_mode);
        let catalog = Catalog::classic();

        if let Err(err) = artwork_images::validate(&catalog) {
            tracing::error!(error = %err, "embedded artwork failed validation");
        }

        tracing::info!(
            locale = %i18n.current_locale(),
            theme_mode = ?theme.mode,
            artworks = catalog.len().get(),
            "gallery ready"
        );

        let app = App {
            i18n,
            catalog,
            gallery: GalleryState::for_catalog(&catalog),
            theme,
        };

        (app, Task::none())
    }

    /// Current cursor position.
    #[must_use]
    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    fn title(&self) -> String {
        let caption = gallery::current_caption(&self.i18n, &self.catalog, &self.gallery);
        self.i18n
            .tr_with_args("window-title-with-artwork", &[("title", &caption.title)])
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            catalog: &self.catalog,
            gallery: &mut self.gallery,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            gallery: &self.gallery,
            theme: &self.theme,
        })
    }
}
