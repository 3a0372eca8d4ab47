// SPDX-License-Identifier: MPL-2.0
//! Behavior of the button, spinner and overlay components as seen by a host.

use iced_swatch::i18n::I18n;
use iced_swatch::ui::components::{Button, ButtonKind, DisplayMode, Overlay, Spinner, SpinnerColor};
use iced_swatch::ui::icons::{self, Icon};
use iced_swatch::ui::showcase::{CatalogKind, Message, State};
use iced_swatch::ui::size::Size;

#[test]
fn outline_button_with_left_icon_shows_icon_then_text() {
    let arrow = icons::lookup("icon-arrow-left").expect("arrow icon is registered");
    let button: Button<()> = Button::new("outline")
        .kind(ButtonKind::Outline)
        .text("Outline")
        .icon_left(arrow);

    assert_eq!(
        button.display_mode(),
        DisplayMode::Content {
            icon_left: Some(Icon::ArrowLeft),
            text: Some("Outline".to_string()),
            icon_right: None,
        }
    );
    assert!(button.spinner().view::<()>().is_none());
    assert!(button.classes().contains("button--type-outline"));
    assert!(button.classes().contains("button--has-icon"));
}

#[test]
fn loading_button_shows_spinner_only() {
    let button: Button<()> = Button::new("busy")
        .loading(true)
        .text("X")
        .icon_right(Icon::ArrowRight);

    assert_eq!(button.display_mode(), DisplayMode::Loading);
    assert!(button.spinner().is_loading);
    assert!(button.spinner().view::<()>().is_some());
}

#[test]
fn loading_wins_over_icon_only() {
    let button: Button<()> = Button::new("both").icon_only(Icon::Plus).loading(true);
    assert_eq!(button.display_mode(), DisplayMode::Loading);
}

#[test]
fn spinner_color_contrasts_with_kind() {
    for kind in ButtonKind::ALL {
        let button: Button<()> = Button::new("c").kind(kind).loading(true);
        let expected = if kind == ButtonKind::Primary {
            SpinnerColor::White
        } else {
            SpinnerColor::Blue
        };
        assert_eq!(button.spinner().color, expected);
    }
}

#[test]
fn disabled_button_keeps_content_but_drops_handler() {
    let button = Button::new("off")
        .text("Save")
        .icon_left(Icon::ArrowLeft)
        .disabled(true)
        .on_press("pressed");

    assert!(matches!(button.display_mode(), DisplayMode::Content { .. }));
    assert!(button.press_message().is_none());
    assert!(button.classes().contains("button--disabled"));
}

#[test]
fn idle_overlay_renders_nothing() {
    let overlay = Overlay::new();
    assert!(overlay.view::<()>().is_none());
    assert!(overlay.classes().is_none());
}

#[test]
fn loading_overlay_carries_size_and_color() {
    let overlay = Overlay::new()
        .loading(true)
        .size(Size::Large)
        .color(SpinnerColor::White);

    let classes = overlay.classes().expect("loading overlay has tokens");
    assert!(classes.contains("overlay--white"));
    assert!(classes.contains("spinner__icon--large"));
    assert!(overlay.view::<()>().is_some());
}

#[test]
fn idle_spinner_renders_nothing() {
    assert!(Spinner::new().view::<()>().is_none());
    assert!(Spinner::new().loading(true).view::<()>().is_some());
}

#[test]
fn selecting_large_resizes_every_catalog_button() {
    let i18n = I18n::default();
    for catalog in CatalogKind::ALL {
        let mut state = State::new(Size::Small, catalog);
        state.update(Message::SizeSelected(Size::Large));

        let buttons: Vec<_> = state.buttons(&i18n).into_iter().flatten().collect();
        assert_eq!(buttons.len(), catalog.entries().len());
        assert!(buttons
            .iter()
            .all(|button| button.current_size() == Size::Large
                && button.classes().contains("button--size-large")));
    }
}
