// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the gallery's design tokens.

## Organization

- **Palette**: Base colors (Material gray and blue scales)
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use art_space::ui::design_tokens::{palette, spacing};
use iced::Color;

let caption = Color {
    a: 0.8,
    ..palette::GRAY_300
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const GRAY_900: Color = Color::from_rgb(0.129, 0.129, 0.129); // #212121
    pub const GRAY_700: Color = Color::from_rgb(0.380, 0.380, 0.380); // #616161
    pub const GRAY_300: Color = Color::from_rgb(0.878, 0.878, 0.878); // #E0E0E0
    pub const GRAY_100: Color = Color::from_rgb(0.961, 0.961, 0.961); // #F5F5F5

    // Brand colors (blue scale)
    pub const BLUE_100: Color = Color::from_rgb(0.733, 0.871, 0.984); // #BBDEFB
    pub const BLUE_300: Color = Color::from_rgb(0.392, 0.710, 0.965); // #64B5F6
    pub const BLUE_400: Color = Color::from_rgb(0.259, 0.647, 0.961); // #42A5F5
    pub const BLUE_800: Color = Color::from_rgb(0.082, 0.396, 0.753); // #1565C0

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0; // gap between navigation buttons
    pub const MD: f32 = 16.0; // artwork padding, image-to-title gap
    pub const LG: f32 = 24.0; // title-to-buttons gap
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Minimum width of a navigation button so both buttons look balanced.
    pub const NAV_BUTTON_MIN_WIDTH: f32 = 120.0;

    /// Height of a navigation button.
    pub const NAV_BUTTON_HEIGHT: f32 = 44.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Artwork title.
    pub const TITLE_XL: f32 = 32.0;

    /// Year line and button labels.
    pub const BODY_LG: f32 = 16.0;

    /// Placeholder and error text.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const LG: f32 = 12.0; // artwork frame
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Resting button elevation.
    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..Color::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    /// Hovered button elevation.
    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..Color::BLACK
        },
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 6.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_XL > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);

    assert!(radius::FULL > radius::LG);
};
