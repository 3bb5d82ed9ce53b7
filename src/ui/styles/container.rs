// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Full-window gallery background.
pub fn screen(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = colors.surface;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        ..Default::default()
    }
}

/// Rounded outline around the artwork image area.
pub fn artwork_frame(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let frame = colors.frame;
    move |_theme: &Theme| container::Style {
        border: Border {
            color: frame,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::border;

    #[test]
    fn artwork_frame_is_rounded() {
        let scheme = ColorScheme::dark();
        let style = artwork_frame(&scheme)(&Theme::Dark);
        assert_eq!(style.border.radius, border::Radius::from(radius::LG));
        assert_eq!(style.border.color, scheme.frame);
        assert!(style.border.width > 0.0);
        assert_eq!(style.background, None);
    }

    #[test]
    fn screen_uses_scheme_surface() {
        let scheme = ColorScheme::light();
        let style = screen(&scheme)(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(scheme.surface)));
    }
}
