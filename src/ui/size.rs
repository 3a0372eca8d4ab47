// SPDX-License-Identifier: MPL-2.0
//! Size tokens shared by every component.
//!
//! A [`Size`] is a read-only configuration value: components never change it,
//! they only look up their dimensions through it.

use crate::ui::design_tokens::sizing;
use iced::Padding;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered size vocabulary, smallest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Giant,
}

impl Size {
    /// All sizes in ascending order.
    pub const ALL: [Size; 5] = [
        Size::Tiny,
        Size::Small,
        Size::Medium,
        Size::Large,
        Size::Giant,
    ];

    /// Lowercase token used in style class names and config files.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Size::Tiny => "tiny",
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
            Size::Giant => "giant",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Edge of an icon placed inside a button.
    #[must_use]
    pub fn icon_edge(self) -> f32 {
        sizing::ICON[self.index()]
    }

    /// Edge of the spinner glyph.
    #[must_use]
    pub fn spinner_edge(self) -> f32 {
        sizing::SPINNER[self.index()]
    }

    /// Font size of a button label.
    #[must_use]
    pub fn text_size(self) -> f32 {
        sizing::TEXT[self.index()]
    }

    /// Gap between a button's icon and its label.
    #[must_use]
    pub fn gap(self) -> f32 {
        sizing::GAP[self.index()]
    }

    /// Inner padding of a button.
    #[must_use]
    pub fn padding(self) -> Padding {
        let [vertical, horizontal] = sizing::PADDING[self.index()];
        Padding::from([vertical, horizontal])
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Returned when a string is not one of the size tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown size `{0}` (expected tiny, small, medium, large or giant)")]
pub struct ParseSizeError(String);

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Size::ALL
            .into_iter()
            .find(|size| size.token().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSizeError(s.to_string()))
    }
}
