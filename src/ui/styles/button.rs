// SPDX-License-Identifier: MPL-2.0
//! Navigation button styles.
//!
//! The two buttons use swapped colors: "Previous" is dark with a blue label,
//! "Next" is blue with a dark label. Both keep their colors in light and dark
//! themes.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn nav_style(
    background: Color,
    hovered: Color,
    text_color: Color,
    status: button::Status,
) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Active => (background, shadow::SM),
        button::Status::Hovered => (hovered, shadow::MD),
        button::Status::Pressed => (background, shadow::NONE),
        button::Status::Disabled => (
            Color {
                a: 0.5,
                ..background
            },
            shadow::NONE,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow,
        snap: true,
    }
}

/// Style for the "Previous" button.
pub fn previous(_theme: &Theme, status: button::Status) -> button::Style {
    nav_style(
        palette::GRAY_900,
        palette::GRAY_700,
        palette::BLUE_300,
        status,
    )
}

/// Style for the "Next" button.
pub fn next(_theme: &Theme, status: button::Status) -> button::Style {
    nav_style(
        palette::BLUE_300,
        palette::BLUE_400,
        palette::GRAY_900,
        status,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_and_next_swap_colors() {
        let theme = Theme::Dark;
        let prev = previous(&theme, button::Status::Active);
        let next = next(&theme, button::Status::Active);

        assert_eq!(prev.background, Some(Background::Color(palette::GRAY_900)));
        assert_eq!(prev.text_color, palette::BLUE_300);
        assert_eq!(next.background, Some(Background::Color(palette::BLUE_300)));
        assert_eq!(next.text_color, palette::GRAY_900);
    }

    #[test]
    fn hover_changes_background() {
        let theme = Theme::Light;
        let active = next(&theme, button::Status::Active);
        let hovered = next(&theme, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn colors_do_not_depend_on_theme() {
        let light = previous(&Theme::Light, button::Status::Active);
        let dark = previous(&Theme::Dark, button::Status::Active);
        assert_eq!(light.background, dark.background);
        assert_eq!(light.text_color, dark.text_color);
    }
}
