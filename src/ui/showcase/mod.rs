// SPDX-License-Identifier: MPL-2.0
//! Showcase screen exercising every button, spinner and overlay variant.
//!
//! The page state is the selected size and catalog, plus a few demo extras:
//! an overlay toggle, the id of the last pressed button, and the rotation of
//! the loading spinners.

pub mod catalog;
mod view;

pub use catalog::{CatalogKind, Entry, EntryState, Layout};
pub use view::{view, ViewContext};

use crate::i18n::I18n;
use crate::ui::components::{Button, Spinner};
use crate::ui::size::Size;
use crate::ui::theming::ThemeMode;
use unic_langid::LanguageIdentifier;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SizeSelected(Size),
    CatalogSelected(CatalogKind),
    ThemeSelected(ThemeMode),
    LanguageSelected(LanguageIdentifier),
    ButtonPressed(String),
    ToggleOverlay,
    SpinnerTick,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    SizeChanged(Size),
    CatalogChanged(CatalogKind),
    ThemeChanged(ThemeMode),
    LanguageChanged(LanguageIdentifier),
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    size: Size,
    catalog: CatalogKind,
    overlay_visible: bool,
    last_pressed: Option<String>,
    spinner_rotation: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Size::default(), CatalogKind::default())
    }
}

impl State {
    #[must_use]
    pub fn new(size: Size, catalog: CatalogKind) -> Self {
        Self {
            size,
            catalog,
            overlay_visible: false,
            last_pressed: None,
            spinner_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn catalog(&self) -> CatalogKind {
        self.catalog
    }

    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    #[must_use]
    pub fn last_pressed(&self) -> Option<&str> {
        self.last_pressed.as_deref()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SizeSelected(size) => {
                if size == self.size {
                    return Event::None;
                }
                self.size = size;
                Event::SizeChanged(size)
            }
            Message::CatalogSelected(catalog) => {
                if catalog == self.catalog {
                    return Event::None;
                }
                self.catalog = catalog;
                Event::CatalogChanged(catalog)
            }
            Message::ThemeSelected(mode) => Event::ThemeChanged(mode),
            Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
            Message::ButtonPressed(id) => {
                tracing::info!(button = %id, "button pressed");
                self.last_pressed = Some(id);
                Event::None
            }
            Message::ToggleOverlay => {
                self.overlay_visible = !self.overlay_visible;
                tracing::debug!(visible = self.overlay_visible, "overlay toggled");
                Event::None
            }
            Message::SpinnerTick => {
                self.spinner_rotation += SPINNER_SPEED;
                if self.spinner_rotation > std::f32::consts::TAU {
                    self.spinner_rotation -= std::f32::consts::TAU;
                }
                Event::None
            }
        }
    }

    /// Whether any spinner is on screen and needs animation ticks.
    #[must_use]
    pub fn has_active_spinner(&self) -> bool {
        self.overlay_visible
            || !self.spinner_row().is_empty()
            || self
                .catalog
                .entries()
                .iter()
                .any(|entry| entry.state == EntryState::Loading)
    }

    /// Standalone spinners, one per size, when the catalog shows them.
    #[must_use]
    pub fn spinner_row(&self) -> Vec<Spinner> {
        if !self.catalog.shows_spinner_row() {
            return Vec::new();
        }
        Size::ALL
            .into_iter()
            .map(|size| {
                Spinner::new()
                    .loading(true)
                    .size(size)
                    .rotation(self.spinner_rotation)
            })
            .collect()
    }

    /// Catalog buttons grouped by row, all at the selected size.
    #[must_use]
    pub fn buttons(&self, i18n: &I18n) -> Vec<Vec<Button<Message>>> {
        self.catalog
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|entry| {
                        entry
                            .button(i18n.tr(entry.label_key()), self.size, Message::ButtonPressed)
                            .spinner_rotation(self.spinner_rotation)
                    })
                    .collect()
            })
            .collect()
    }
}
