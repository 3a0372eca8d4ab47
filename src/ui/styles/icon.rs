// SPDX-License-Identifier: MPL-2.0
//! SVG glyph styles.

use iced::widget::svg;
use iced::{Color, Theme};

/// Tints a monochrome SVG glyph with `color`.
pub fn tint(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
