// SPDX-License-Identifier: MPL-2.0
//! Fixed button catalogs shown by the showcase.
//!
//! The expanded catalog crosses every [`ButtonKind`] with every [`Layout`]
//! and every [`EntryState`]. The minimal catalog is a single row with one
//! text button per kind.

use crate::ui::components::{Button, ButtonKind};
use crate::ui::icons::Icon;
use crate::ui::size::Size;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    #[default]
    Showcase,
    Minimal,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 2] = [CatalogKind::Showcase, CatalogKind::Minimal];

    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            CatalogKind::Showcase => "showcase",
            CatalogKind::Minimal => "minimal",
        }
    }

    /// Buttons of the catalog grouped by display row.
    #[must_use]
    pub fn rows(self) -> Vec<Vec<Entry>> {
        match self {
            CatalogKind::Showcase => ButtonKind::ALL
                .into_iter()
                .flat_map(|kind| {
                    Layout::ALL.into_iter().map(move |layout| {
                        EntryState::ALL
                            .into_iter()
                            .map(|state| Entry {
                                kind,
                                layout,
                                state,
                            })
                            .collect()
                    })
                })
                .collect(),
            CatalogKind::Minimal => vec![ButtonKind::ALL
                .into_iter()
                .map(|kind| Entry {
                    kind,
                    layout: Layout::Text,
                    state: EntryState::Default,
                })
                .collect()],
        }
    }

    /// Whether the page shows the row of standalone spinners.
    #[must_use]
    pub fn shows_spinner_row(self) -> bool {
        matches!(self, CatalogKind::Showcase)
    }

    /// Every entry of the catalog in display order.
    #[must_use]
    pub fn entries(self) -> Vec<Entry> {
        self.rows().into_iter().flatten().collect()
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown catalog `{0}` (expected showcase or minimal)")]
pub struct ParseCatalogError(String);

impl FromStr for CatalogKind {
    type Err = ParseCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatalogKind::ALL
            .into_iter()
            .find(|kind| kind.token().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCatalogError(s.to_string()))
    }
}

/// Where the icon sits relative to the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Text,
    IconLeft,
    IconRight,
    IconOnly,
}

impl Layout {
    pub const ALL: [Layout; 4] = [
        Layout::Text,
        Layout::IconLeft,
        Layout::IconRight,
        Layout::IconOnly,
    ];

    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Layout::Text => "text",
            Layout::IconLeft => "icon-left",
            Layout::IconRight => "icon-right",
            Layout::IconOnly => "icon-only",
        }
    }

    /// Translation key of the row heading.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Layout::Text => "showcase-layout-text",
            Layout::IconLeft => "showcase-layout-icon-left",
            Layout::IconRight => "showcase-layout-icon-right",
            Layout::IconOnly => "showcase-layout-icon-only",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Default,
    Loading,
    Disabled,
}

impl EntryState {
    pub const ALL: [EntryState; 3] = [
        EntryState::Default,
        EntryState::Loading,
        EntryState::Disabled,
    ];

    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            EntryState::Default => "default",
            EntryState::Loading => "loading",
            EntryState::Disabled => "disabled",
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            EntryState::Default => "showcase-state-default",
            EntryState::Loading => "showcase-state-loading",
            EntryState::Disabled => "showcase-state-disabled",
        }
    }
}

/// One button configuration of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub kind: ButtonKind,
    pub layout: Layout,
    pub state: EntryState,
}

impl Entry {
    /// Unique per catalog; used as the button id prefix.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!(
            "{}-{}-{}",
            self.kind.token(),
            self.layout.token(),
            self.state.token()
        )
    }

    /// Translation key of the button label.
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self.kind {
            ButtonKind::Primary => "showcase-kind-primary",
            ButtonKind::Outline => "showcase-kind-outline",
            ButtonKind::Clear => "showcase-kind-clear",
        }
    }

    /// Builds the button for this entry. `on_press` receives the button id.
    pub fn button<Message: Clone + 'static>(
        &self,
        label: impl Into<String>,
        size: Size,
        on_press: impl FnOnce(String) -> Message,
    ) -> Button<Message> {
        let button = Button::new(self.prefix())
            .kind(self.kind)
            .size(size)
            .loading(self.state == EntryState::Loading)
            .disabled(self.state == EntryState::Disabled);

        let button = match self.layout {
            Layout::Text => button.text(label),
            Layout::IconLeft => button.text(label).icon_left(Icon::ArrowLeft),
            Layout::IconRight => button.text(label).icon_right(Icon::ArrowRight),
            Layout::IconOnly => button.icon_only(Icon::Plus),
        };

        let message = on_press(button.id());
        button.on_press(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::DisplayMode;
    use std::collections::HashSet;

    #[test]
    fn showcase_catalog_covers_every_combination() {
        let entries = CatalogKind::Showcase.entries();
        assert_eq!(
            entries.len(),
            ButtonKind::ALL.len() * Layout::ALL.len() * EntryState::ALL.len()
        );
        let prefixes: HashSet<_> = entries.iter().map(Entry::prefix).collect();
        assert_eq!(prefixes.len(), entries.len(), "prefixes must be unique");
    }

    #[test]
    fn showcase_rows_group_states_of_one_layout() {
        for row in CatalogKind::Showcase.rows() {
            assert_eq!(row.len(), EntryState::ALL.len());
            assert!(row.iter().all(|e| e.kind == row[0].kind && e.layout == row[0].layout));
        }
    }

    #[test]
    fn minimal_catalog_is_three_text_buttons() {
        let rows = CatalogKind::Minimal.rows();
        assert_eq!(rows.len(), 1);
        let kinds: Vec<_> = rows[0].iter().map(|e| e.kind).collect();
        assert_eq!(kinds, ButtonKind::ALL.to_vec());
        assert!(rows[0]
            .iter()
            .all(|e| e.layout == Layout::Text && e.state == EntryState::Default));
    }

    #[test]
    fn entry_button_reflects_layout_and_state() {
        let entry = Entry {
            kind: ButtonKind::Outline,
            layout: Layout::IconLeft,
            state: EntryState::Disabled,
        };
        let button = entry.button("Outline", Size::Large, |id| id);

        assert_eq!(button.id(), "button-outline-icon-left-disabled");
        assert_eq!(button.current_size(), Size::Large);
        assert!(button.is_disabled());
        assert_eq!(
            button.display_mode(),
            DisplayMode::Content {
                icon_left: Some(Icon::ArrowLeft),
                text: Some("Outline".to_string()),
                icon_right: None,
            }
        );
    }

    #[test]
    fn icon_only_entry_has_no_label() {
        let entry = Entry {
            kind: ButtonKind::Clear,
            layout: Layout::IconOnly,
            state: EntryState::Default,
        };
        let button = entry.button("Clear", Size::Small, |id| id);
        assert_eq!(button.display_mode(), DisplayMode::IconOnly(Icon::Plus));
        assert_eq!(
            button.press_message().map(String::as_str),
            Some("button-clear-icon-only-default")
        );
    }

    #[test]
    fn catalog_kind_parses_tokens() {
        assert_eq!("minimal".parse::<CatalogKind>(), Ok(CatalogKind::Minimal));
        assert_eq!(" Showcase ".parse::<CatalogKind>(), Ok(CatalogKind::Showcase));
        assert!("full".parse::<CatalogKind>().is_err());
    }
}
