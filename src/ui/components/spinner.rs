// SPDX-License-Identifier: MPL-2.0
//! Loading spinner.
//!
//! The spinner is either absent or a single `icon-spinner` glyph. It holds no
//! state: the rotation angle is supplied by the host, which advances it from
//! its own tick subscription.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::spinner::{Spinner, SpinnerColor};
//!
//! let spinner = Spinner::new()
//!     .loading(state.is_loading())
//!     .size(Size::Large)
//!     .color(SpinnerColor::White)
//!     .rotation(state.spinner_rotation());
//!
//! if let Some(element) = spinner.view() {
//!     column = column.push(element);
//! }
//! ```

use crate::ui::class_list::ClassList;
use crate::ui::design_tokens::palette;
use crate::ui::icons::{self, Icon};
use crate::ui::size::Size;
use iced::{Color, Element, Radians};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph color. Chosen by the caller to contrast with what lies beneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerColor {
    #[default]
    Blue,
    White,
}

impl SpinnerColor {
    pub const ALL: [SpinnerColor; 2] = [SpinnerColor::Blue, SpinnerColor::White];

    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            SpinnerColor::Blue => "blue",
            SpinnerColor::White => "white",
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            SpinnerColor::Blue => palette::PRIMARY_500,
            SpinnerColor::White => palette::WHITE,
        }
    }
}

impl fmt::Display for SpinnerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Spinner props. Defaults: not loading, `small`, `blue`, no rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spinner {
    pub is_loading: bool,
    pub size: Size,
    pub color: SpinnerColor,
    /// Rotation angle of the glyph, in radians.
    pub rotation: f32,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            is_loading: false,
            size: Size::Small,
            color: SpinnerColor::Blue,
            rotation: 0.0,
        }
    }
}

impl Spinner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn color(mut self, color: SpinnerColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Style tokens of the rendered spinner, `None` when nothing is rendered.
    #[must_use]
    pub fn classes(&self) -> Option<ClassList> {
        if !self.is_loading {
            return None;
        }
        Some(
            ClassList::new()
                .with("spinner")
                .with(format!("spinner--{}", self.color.token()))
                .with("spinner__icon")
                .with(format!("spinner__icon--{}", self.size.token())),
        )
    }

    /// Renders the spinner glyph, or `None` when not loading.
    #[must_use]
    pub fn view<'a, Message: 'a>(self) -> Option<Element<'a, Message>> {
        if !self.is_loading {
            return None;
        }
        let glyph = icons::svg(Icon::Spinner, self.size.spinner_edge(), self.color.color())
            .rotation(Radians(self.rotation));
        Some(glyph.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_props() {
        let spinner = Spinner::default();
        assert!(!spinner.is_loading);
        assert_eq!(spinner.size, Size::Small);
        assert_eq!(spinner.color, SpinnerColor::Blue);
    }

    #[test]
    fn not_loading_renders_nothing() {
        let spinner = Spinner::new().size(Size::Giant).color(SpinnerColor::White);
        assert!(spinner.classes().is_none());
        assert!(spinner.view::<()>().is_none());
    }

    #[test]
    fn loading_renders_size_and_color_tokens() {
        let spinner = Spinner::new()
            .loading(true)
            .size(Size::Large)
            .color(SpinnerColor::White);

        let classes = spinner.classes().expect("spinner should render");
        assert_eq!(
            classes.to_string(),
            "spinner spinner--white spinner__icon spinner__icon--large"
        );
        assert!(spinner.view::<()>().is_some());
    }

    #[test]
    fn rotation_does_not_change_tokens() {
        let still = Spinner::new().loading(true);
        let turned = still.rotation(1.5);
        assert_eq!(still.classes(), turned.classes());
    }
}
