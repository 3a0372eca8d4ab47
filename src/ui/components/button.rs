// SPDX-License-Identifier: MPL-2.0
//! Styled button with optional icons and a loading state.
//!
//! What the button shows is decided once, by [`Button::display_mode`]:
//!
//! 1. loading: a spinner and nothing else, whatever the other props say
//! 2. icon-only: that icon and nothing else
//! 3. otherwise: left icon, label and right icon, each shown iff provided
//!
//! Disabled never hides content. It drops the press message, so Iced treats
//! the button as non-interactive, and switches to the grayed out style.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::button::{Button, ButtonKind};
//!
//! Button::new("save")
//!     .kind(ButtonKind::Outline)
//!     .text("Save")
//!     .icon_left(Icon::ArrowLeft)
//!     .size(Size::Large)
//!     .on_press(Message::Save)
//!     .view()
//! ```

use crate::ui::class_list::ClassList;
use crate::ui::components::spinner::{Spinner, SpinnerColor};
use crate::ui::icons::{self, Icon};
use crate::ui::size::Size;
use crate::ui::styles;
use iced::widget::{button, text, Row};
use iced::{alignment, Element};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of the spinner drawn inside a loading button, whatever the button size.
const LOADING_SPINNER_SIZE: Size = Size::Small;

/// Visual category of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Primary,
    Outline,
    Clear,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 3] = [ButtonKind::Primary, ButtonKind::Outline, ButtonKind::Clear];

    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            ButtonKind::Primary => "primary",
            ButtonKind::Outline => "outline",
            ButtonKind::Clear => "clear",
        }
    }

    /// Spinner color that contrasts with this kind's background.
    #[must_use]
    pub fn spinner_color(self) -> SpinnerColor {
        match self {
            ButtonKind::Primary => SpinnerColor::White,
            ButtonKind::Outline | ButtonKind::Clear => SpinnerColor::Blue,
        }
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The single thing a button renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayMode {
    Loading,
    IconOnly(Icon),
    Content {
        icon_left: Option<Icon>,
        text: Option<String>,
        icon_right: Option<Icon>,
    },
}

/// Where an icon sits inside a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconPlacement {
    Left,
    Right,
    Only,
}

/// Button props. Defaults: `primary`, `medium`, enabled, not loading, no
/// label, no icons, no press message.
#[derive(Debug, Clone)]
pub struct Button<Message> {
    prefix: String,
    kind: ButtonKind,
    text: Option<String>,
    icon_left: Option<Icon>,
    icon_right: Option<Icon>,
    icon_only: Option<Icon>,
    disabled: bool,
    loading: bool,
    size: Size,
    on_press: Option<Message>,
    spinner_rotation: f32,
}

impl<Message> Default for Button<Message> {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            kind: ButtonKind::default(),
            text: None,
            icon_left: None,
            icon_right: None,
            icon_only: None,
            disabled: false,
            loading: false,
            size: Size::default(),
            on_press: None,
            spinner_rotation: 0.0,
        }
    }
}

impl<Message: Clone + 'static> Button<Message> {
    /// Creates a button identified by `prefix` (see [`Button::id`]).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the label. An empty label counts as no label.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = (!text.is_empty()).then_some(text);
        self
    }

    pub fn icon_left(mut self, icon: Icon) -> Self {
        self.icon_left = Some(icon);
        self
    }

    pub fn icon_right(mut self, icon: Icon) -> Self {
        self.icon_right = Some(icon);
        self
    }

    /// Shows only `icon`, hiding the label and the left/right icons.
    pub fn icon_only(mut self, icon: Icon) -> Self {
        self.icon_only = Some(icon);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Message emitted when the enabled button is pressed.
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    pub fn on_press_maybe(mut self, message: Option<Message>) -> Self {
        self.on_press = message;
        self
    }

    /// Rotation of the loading spinner, in radians.
    pub fn spinner_rotation(mut self, rotation: f32) -> Self {
        self.spinner_rotation = rotation;
        self
    }

    /// `button-{prefix}`.
    #[must_use]
    pub fn id(&self) -> String {
        format!("button-{}", self.prefix)
    }

    /// `button-text-{prefix}`.
    #[must_use]
    pub fn text_id(&self) -> String {
        format!("button-text-{}", self.prefix)
    }

    #[must_use]
    pub fn current_kind(&self) -> ButtonKind {
        self.kind
    }

    #[must_use]
    pub fn current_size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message the rendered widget will emit, if any. `None` while disabled.
    #[must_use]
    pub fn press_message(&self) -> Option<&Message> {
        if self.disabled {
            None
        } else {
            self.on_press.as_ref()
        }
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        if self.loading {
            return DisplayMode::Loading;
        }
        if let Some(icon) = self.icon_only {
            return DisplayMode::IconOnly(icon);
        }
        DisplayMode::Content {
            icon_left: self.icon_left,
            text: self.text.clone(),
            icon_right: self.icon_right,
        }
    }

    #[must_use]
    pub fn spinner_color(&self) -> SpinnerColor {
        self.kind.spinner_color()
    }

    /// The spinner this button embeds; rendered only while loading.
    #[must_use]
    pub fn spinner(&self) -> Spinner {
        Spinner::new()
            .loading(self.loading)
            .size(LOADING_SPINNER_SIZE)
            .color(self.spinner_color())
            .rotation(self.spinner_rotation)
    }

    /// Style tokens of the button itself.
    #[must_use]
    pub fn classes(&self) -> ClassList {
        ClassList::new()
            .with("button")
            .with(format!("button--type-{}", self.kind.token()))
            .with(format!("button--size-{}", self.size.token()))
            .with_if("button--icon-only", self.icon_only.is_some())
            .with_if(
                "button--has-icon",
                self.icon_left.is_some() || self.icon_right.is_some(),
            )
            .with_if("button--disabled", self.disabled)
            .with_if("button--loading", self.loading)
    }

    /// Style tokens of the label.
    #[must_use]
    pub fn text_classes(&self) -> ClassList {
        ClassList::new()
            .with("button__text")
            .with_if("button__text--icon-left", self.icon_left.is_some())
            .with_if("button__text--icon-right", self.icon_right.is_some())
            .with(format!("button__text--{}", self.size.token()))
    }

    /// Style tokens of an icon at `placement`.
    #[must_use]
    pub fn icon_classes(&self, placement: IconPlacement) -> ClassList {
        ClassList::new()
            .with("button__icon")
            .with(format!("button__icon--{}", self.size.token()))
            .with_if("button__icon--left", placement == IconPlacement::Left)
            .with_if("button__icon--right", placement == IconPlacement::Right)
    }

    /// Renders the button.
    pub fn view(self) -> Element<'static, Message> {
        let color = styles::button::content_color(self.kind, self.disabled);
        let icon_edge = self.size.icon_edge();

        let mut content = Row::new()
            .spacing(self.size.gap())
            .align_y(alignment::Vertical::Center);

        match self.display_mode() {
            DisplayMode::Loading => {
                if let Some(spinner) = self.spinner().view() {
                    content = content.push(spinner);
                }
            }
            DisplayMode::IconOnly(icon) => {
                content = content.push(icons::svg(icon, icon_edge, color));
            }
            DisplayMode::Content {
                icon_left,
                text: label,
                icon_right,
            } => {
                if let Some(icon) = icon_left {
                    content = content.push(icons::svg(icon, icon_edge, color));
                }
                if let Some(label) = label {
                    content = content.push(text(label).size(self.size.text_size()));
                }
                if let Some(icon) = icon_right {
                    content = content.push(icons::svg(icon, icon_edge, color));
                }
            }
        }

        let on_press = self.press_message().cloned();

        button(content)
            .padding(self.size.padding())
            .style(styles::button::style(self.kind, self.disabled))
            .on_press_maybe(on_press)
            .into()
    }
}
