// SPDX-License-Identifier: MPL-2.0
//! Loading overlay: a full-area veil with a centered spinner.
//!
//! Like the spinner, the overlay is absent when nothing is loading. [`Overlay::over`]
//! stacks it on top of existing content and swallows pointer events while shown.

use crate::ui::class_list::ClassList;
use crate::ui::components::spinner::{Spinner, SpinnerColor};
use crate::ui::size::Size;
use crate::ui::styles;
use iced::widget::{container, opaque, Container, Stack};
use iced::{Element, Length};

/// Overlay props. Defaults: not loading, `small`, `blue`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub is_loading: bool,
    pub size: Size,
    pub color: SpinnerColor,
    pub rotation: f32,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            is_loading: false,
            size: Size::Small,
            color: SpinnerColor::Blue,
            rotation: 0.0,
        }
    }
}

impl Overlay {
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

    /// The spinner shown inside the overlay, configured with the same props.
    #[must_use]
    pub fn spinner(&self) -> Spinner {
        Spinner::new()
            .loading(self.is_loading)
            .size(self.size)
            .color(self.color)
            .rotation(self.rotation)
    }

    /// Style tokens of the surface and its spinner, `None` when not loading.
    #[must_use]
    pub fn classes(&self) -> Option<ClassList> {
        if !self.is_loading {
            return None;
        }
        let surface = ClassList::new()
            .with("overlay")
            .with(format!("overlay--{}", self.color.token()));
        Some(match self.spinner().classes() {
            Some(spinner) => surface.merge(spinner),
            None => surface,
        })
    }

    /// Renders the covering surface, or `None` when not loading.
    #[must_use]
    pub fn view<'a, Message: 'a>(self) -> Option<Element<'a, Message>> {
        let spinner = self.spinner().view()?;
        let surface: Container<'a, Message> = container(spinner)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::overlay::surface(self.color));
        Some(opaque(surface))
    }

    /// Layers the overlay on top of `content`. `content` is always shown.
    #[must_use]
    pub fn over<'a, Message: 'a>(
        self,
        content: impl Into<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        match self.view() {
            Some(surface) => Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(content)
                .push(surface)
                .into(),
            None => content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text;

    #[test]
    fn not_loading_renders_nothing() {
        let overlay = Overlay::new();
        assert!(overlay.classes().is_none());
        assert!(overlay.view::<()>().is_none());
    }

    #[test]
    fn loading_overlay_carries_its_spinner() {
        let overlay = Overlay::new()
            .loading(true)
            .size(Size::Giant)
            .color(SpinnerColor::White);

        let classes = overlay.classes().expect("overlay should render");
        assert!(classes.contains("overlay"));
        assert!(classes.contains("overlay--white"));
        assert!(classes.contains("spinner--white"));
        assert!(classes.contains("spinner__icon--giant"));
        assert!(overlay.view::<()>().is_some());
    }

    #[test]
    fn spinner_mirrors_overlay_props() {
        let overlay = Overlay::new()
            .loading(true)
            .size(Size::Tiny)
            .color(SpinnerColor::White)
            .rotation(0.5);
        let spinner = overlay.spinner();

        assert!(spinner.is_loading);
        assert_eq!(spinner.size, Size::Tiny);
        assert_eq!(spinner.color, SpinnerColor::White);
        assert_eq!(spinner.rotation, 0.5);
    }

    #[test]
    fn over_builds_with_and_without_surface() {
        let _shown: Element<'_, ()> = Overlay::new().loading(true).over(text("content"));
        let _hidden: Element<'_, ()> = Overlay::new().over(text("content"));
    }
}
