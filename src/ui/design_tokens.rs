// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, sizing and radius used by the components lives here.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Per-size icon, spinner, text and padding scales
- **Typography**: Font size scale for page chrome
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_swatch::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```

The size scales are indexed through [`Size`](crate::ui::size::Size) rather
than read directly, so a component never picks a dimension on its own.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.84, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    //! Dimension scales, one entry per size token from `tiny` to `giant`.

    /// Icon edge inside buttons.
    pub const ICON: [f32; 5] = [12.0, 14.0, 16.0, 20.0, 24.0];

    /// Spinner glyph edge.
    pub const SPINNER: [f32; 5] = [12.0, 16.0, 24.0, 32.0, 48.0];

    /// Button label font size.
    pub const TEXT: [f32; 5] = [11.0, 12.0, 14.0, 16.0, 20.0];

    /// Button padding as `[vertical, horizontal]`.
    pub const PADDING: [[f32; 2]; 5] = [
        [2.0, 6.0],
        [4.0, 10.0],
        [8.0, 16.0],
        [10.0, 20.0],
        [14.0, 28.0],
    ];

    /// Gap between icon and label inside a button.
    pub const GAP: [f32; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

    /// Width of the row label column on the showcase page.
    pub const SHOWCASE_LABEL_WIDTH: f32 = 180.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes for page chrome (titles, captions). Button labels use
    //! [`sizing::TEXT`](super::sizing::TEXT) instead.

    /// Large title - Page heading
    pub const TITLE_LG: f32 = 30.0;

    /// Standard body - Labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Status line, row labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Outline buttons
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_STRONG < 1.0);

    // Size scales must grow from tiny to giant
    let mut i = 1;
    while i < 5 {
        assert!(sizing::ICON[i] > sizing::ICON[i - 1]);
        assert!(sizing::SPINNER[i] > sizing::SPINNER[i - 1]);
        assert!(sizing::TEXT[i] > sizing::TEXT[i - 1]);
        assert!(sizing::PADDING[i][0] > sizing::PADDING[i - 1][0]);
        i += 1;
    }

    // Typography validation
    assert!(typography::TITLE_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn medium_button_padding_sits_on_the_grid() {
        assert_eq!(sizing::PADDING[2], [spacing::XS, spacing::MD]);
    }
}
