// SPDX-License-Identifier: MPL-2.0
//! Styles for the loading overlay surface.

use crate::ui::components::spinner::SpinnerColor;
use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Backdrop color that keeps a spinner of `color` readable.
///
/// A blue spinner sits on a light veil, a white one on a dark veil.
#[must_use]
pub fn backdrop(color: SpinnerColor) -> Color {
    match color {
        SpinnerColor::Blue => Color {
            a: opacity::OVERLAY_STRONG,
            ..WHITE
        },
        SpinnerColor::White => Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        },
    }
}

/// Full-area covering surface.
pub fn surface(color: SpinnerColor) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(backdrop(color))),
        ..Default::default()
    }
}
