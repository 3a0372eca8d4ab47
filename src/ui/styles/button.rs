// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles, one family per [`ButtonKind`].
//!
//! The `disabled` flag is explicit rather than read from
//! `button::Status::Disabled`: a button without a press handler is also
//! reported as disabled by Iced, but must keep its enabled look.

use crate::ui::components::button::ButtonKind;
use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Returns the style function for a button of the given kind.
pub fn style(kind: ButtonKind, disabled: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if disabled {
            return disabled_style(theme, kind);
        }
        match kind {
            ButtonKind::Primary => primary(theme, status),
            ButtonKind::Outline => outline(theme, status),
            ButtonKind::Clear => clear(theme, status),
        }
    }
}

/// Foreground color for icons and spinners drawn inside a button.
///
/// Text picks this up through `button::Style::text_color`; SVG glyphs need it
/// passed explicitly.
#[must_use]
pub fn content_color(kind: ButtonKind, disabled: bool) -> Color {
    if disabled {
        return palette::GRAY_400;
    }
    match kind {
        ButtonKind::Primary => WHITE,
        ButtonKind::Outline | ButtonKind::Clear => palette::PRIMARY_500,
    }
}

/// Filled brand button (main action).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Pressed => (palette::PRIMARY_600, palette::PRIMARY_700, shadow::NONE),
        button::Status::Active | button::Status::Disabled => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Transparent button with a brand-colored border.
pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::PRIMARY_100
        })),
        button::Status::Pressed => Some(Background::Color(palette::PRIMARY_200)),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette::PRIMARY_500,
        border: Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button; only hover and press show a surface.
pub fn clear(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_200
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::PRIMARY_200
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette::PRIMARY_500,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Grayed out, non-interactive look. Keeps the silhouette of the kind.
fn disabled_style(theme: &Theme, kind: ButtonKind) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match kind {
        ButtonKind::Primary => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        ButtonKind::Outline => button::Style {
            background: None,
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        ButtonKind::Clear => button::Style {
            background: None,
            text_color: palette::GRAY_400,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = style(ButtonKind::Primary, false)(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn outline_and_clear_are_transparent_at_rest() {
        let theme = Theme::Light;
        let outline = style(ButtonKind::Outline, false)(&theme, button::Status::Active);
        let clear = style(ButtonKind::Clear, false)(&theme, button::Status::Active);

        assert!(outline.background.is_none());
        assert_eq!(outline.border.color, palette::PRIMARY_500);
        assert!(clear.background.is_none());
        assert_eq!(clear.border.width, 0.0);
    }

    #[test]
    fn hover_changes_background() {
        let theme = Theme::Dark;
        for kind in ButtonKind::ALL {
            let style_fn = style(kind, false);
            let normal = style_fn(&theme, button::Status::Active);
            let hover = style_fn(&theme, button::Status::Hovered);
            assert_ne!(normal.background, hover.background, "{kind:?}");
        }
    }

    #[test]
    fn handlerless_button_keeps_enabled_look() {
        // Iced reports a button without `on_press` as Disabled.
        let theme = Theme::Dark;
        let style = style(ButtonKind::Primary, false)(&theme, button::Status::Disabled);
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn disabled_flag_grays_out_every_kind() {
        let theme = Theme::Light;
        for kind in ButtonKind::ALL {
            let style = style(kind, true)(&theme, button::Status::Hovered);
            assert_eq!(style.text_color, palette::GRAY_400, "{kind:?}");
            assert_eq!(content_color(kind, true), palette::GRAY_400);
        }
    }

    #[test]
    fn content_color_contrasts_with_background() {
        assert_eq!(content_color(ButtonKind::Primary, false), WHITE);
        assert_eq!(content_color(ButtonKind::Outline, false), palette::PRIMARY_500);
        assert_eq!(content_color(ButtonKind::Clear, false), palette::PRIMARY_500);
    }
}
