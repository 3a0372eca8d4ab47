// SPDX-License-Identifier: MPL-2.0
//! Icon lookup keyed by icon identifier.
//!
//! Icons are SVG files embedded at compile time via `include_bytes!`. Each
//! handle is created once on first access and cached in a `OnceLock`, so
//! rendering the same icon in dozens of buttons never re-parses the source.
//!
//! Components refer to icons by [`Icon`]; hosts that only know the string
//! identifier (`"icon-arrow-left"`) go through [`lookup`]. Unknown identifiers
//! resolve to `None` and render nothing.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons::{self, Icon};
//!
//! let glyph = icons::svg(Icon::ArrowLeft, 16.0, palette::WHITE);
//! ```

use crate::ui::styles;
use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Defines the [`Icon`] enum together with its identifier and embedded source.
macro_rules! define_icons {
    ($($variant:ident => $id:literal, $file:literal;)+) => {
        /// Icons known to the lookup.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Icon {
            $($variant,)+
        }

        impl Icon {
            /// Every icon, in declaration order.
            pub const ALL: &'static [Icon] = &[$(Icon::$variant,)+];

            /// Identifier used by hosts and in style class names.
            #[must_use]
            pub fn id(self) -> &'static str {
                match self {
                    $(Icon::$variant => $id,)+
                }
            }

            fn source(self) -> &'static [u8] {
                match self {
                    $(Icon::$variant => include_bytes!(concat!(
                        env!("CARGO_MANIFEST_DIR"),
                        "/assets/icons/",
                        $file
                    )),)+
                }
            }
        }
    };
}

define_icons! {
    Spinner => "icon-spinner", "spinner.svg";
    ArrowLeft => "icon-arrow-left", "arrow_left.svg";
    ArrowRight => "icon-arrow-right", "arrow_right.svg";
    Plus => "icon-plus", "plus.svg";
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when an identifier does not name a known icon.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon `{0}`")]
pub struct UnknownIcon(String);

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

/// Resolves an icon identifier such as `"icon-arrow-left"`.
#[must_use]
pub fn lookup(id: &str) -> Option<Icon> {
    Icon::ALL.iter().copied().find(|icon| icon.id() == id)
}

fn handle(icon: Icon) -> Handle {
    static HANDLES: OnceLock<HashMap<Icon, Handle>> = OnceLock::new();
    let handles = HANDLES.get_or_init(|| {
        Icon::ALL
            .iter()
            .map(|&icon| (icon, Handle::from_memory(icon.source())))
            .collect()
    });
    // Every variant is inserted above.
    handles
        .get(&icon)
        .cloned()
        .unwrap_or_else(|| Handle::from_memory(icon.source()))
}

/// Renders `icon` as a square glyph of the given edge, tinted with `color`.
#[must_use]
pub fn svg<'a>(icon: Icon, edge: f32, color: Color) -> Svg<'a> {
    Svg::new(handle(icon))
        .width(Length::Fixed(edge))
        .height(Length::Fixed(edge))
        .style(styles::icon::tint(color))
}

/// Renders the icon named by `id`, or `None` when the identifier is unknown.
#[must_use]
pub fn svg_by_id<'a>(id: &str, edge: f32, color: Color) -> Option<Svg<'a>> {
    lookup(id).map(|icon| svg(icon, edge, color))
}
