// SPDX-License-Identifier: MPL-2.0
//! Rendering of the showcase screen.

use super::{CatalogKind, Entry, EntryState, Message, State};
use crate::i18n::I18n;
use crate::ui::components::{Button, ButtonKind, Overlay, SpinnerColor};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::size::Size;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{container, pick_list, scrollable, text, Column, Row};
use iced::{alignment, Element, Length};
use std::fmt;

/// Pick list option displaying a translated label. Compares by value only.
#[derive(Debug, Clone)]
struct Choice<T> {
    value: T,
    label: String,
}

impl<T: PartialEq> PartialEq for Choice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn choice<T: Copy>(
    i18n: &I18n,
    prefix: &str,
    value: T,
    token: impl Fn(T) -> &'static str,
) -> Choice<T> {
    Choice {
        value,
        label: i18n.tr(&format!("{prefix}-{}", token(value))),
    }
}

fn size_choice(i18n: &I18n, size: Size) -> Choice<Size> {
    choice(i18n, "size", size, Size::token)
}

fn catalog_choice(i18n: &I18n, catalog: CatalogKind) -> Choice<CatalogKind> {
    choice(i18n, "catalog", catalog, CatalogKind::token)
}

fn theme_choice(i18n: &I18n, mode: ThemeMode) -> Choice<ThemeMode> {
    choice(i18n, "theme", mode, ThemeMode::token)
}

/// Contextual data needed to render the showcase.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub theme_mode: ThemeMode,
}

/// Render the showcase screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = container(build_header(&ctx))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::header);

    let mut body = Column::new().spacing(spacing::LG).push(build_grid(&ctx));
    if let Some(spinner_row) = build_spinner_row(&ctx) {
        body = body.push(spinner_row);
    }

    let panel = container(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel);

    let overlay = Overlay::new()
        .loading(ctx.state.overlay_visible())
        .size(Size::Giant)
        .color(SpinnerColor::Blue)
        .rotation(ctx.state.spinner_rotation());

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(overlay.over(scrollable(panel).height(Length::Fill)))
        .push(build_status_line(&ctx))
        .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let title = text(i18n.tr("showcase-title")).size(typography::TITLE_LG);

    let overlay_label = if state.overlay_visible() {
        i18n.tr("showcase-overlay-hide")
    } else {
        i18n.tr("showcase-overlay-show")
    };
    let overlay_toggle = Button::new("overlay-toggle")
        .kind(ButtonKind::Outline)
        .size(Size::Small)
        .text(overlay_label)
        .on_press(Message::ToggleOverlay)
        .view();

    let locale = i18n.current_locale().clone();
    let controls = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(labeled(
            i18n.tr("showcase-size-label"),
            pick_list(
                Size::ALL.map(|size| size_choice(i18n, size)).to_vec(),
                Some(size_choice(i18n, state.size())),
                |choice| Message::SizeSelected(choice.value),
            ),
        ))
        .push(labeled(
            i18n.tr("showcase-catalog-label"),
            pick_list(
                CatalogKind::ALL
                    .map(|catalog| catalog_choice(i18n, catalog))
                    .to_vec(),
                Some(catalog_choice(i18n, state.catalog())),
                |choice| Message::CatalogSelected(choice.value),
            ),
        ))
        .push(labeled(
            i18n.tr("showcase-theme-label"),
            pick_list(
                ThemeMode::ALL.map(|mode| theme_choice(i18n, mode)).to_vec(),
                Some(theme_choice(i18n, ctx.theme_mode)),
                |choice| Message::ThemeSelected(choice.value),
            ),
        ))
        .push(labeled(
            i18n.tr("showcase-language-label"),
            pick_list(
                i18n.available_locales.clone(),
                Some(locale),
                Message::LanguageSelected,
            ),
        ))
        .push(overlay_toggle);

    Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(controls)
        .into()
}

fn labeled<'a>(
    label: String,
    control: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(text(label).size(typography::BODY))
        .push(control)
        .into()
}

fn build_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let with_headings = state.catalog() == CatalogKind::Showcase;

    let mut grid = Column::new().spacing(spacing::SM);

    if with_headings {
        let mut heading = Row::new()
            .spacing(spacing::MD)
            .push(text("").width(Length::Fixed(sizing::SHOWCASE_LABEL_WIDTH)));
        for entry_state in EntryState::ALL {
            heading = heading.push(
                text(i18n.tr(entry_state.label_key()))
                    .size(typography::CAPTION)
                    .width(Length::Fixed(sizing::SHOWCASE_LABEL_WIDTH)),
            );
        }
        grid = grid.push(heading);
    }

    for (entries, buttons) in state.catalog().rows().iter().zip(state.buttons(i18n)) {
        let mut row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center);

        if with_headings {
            row = row.push(
                text(row_label(i18n, entries))
                    .size(typography::CAPTION)
                    .width(Length::Fixed(sizing::SHOWCASE_LABEL_WIDTH)),
            );
        }
        for button in buttons {
            let cell = container(button.view());
            row = row.push(if with_headings {
                cell.width(Length::Fixed(sizing::SHOWCASE_LABEL_WIDTH))
            } else {
                cell
            });
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn row_label(i18n: &I18n, entries: &[Entry]) -> String {
    entries
        .first()
        .map(|entry| {
            format!(
                "{} / {}",
                i18n.tr(entry.label_key()),
                i18n.tr(entry.layout.label_key())
            )
        })
        .unwrap_or_default()
}

fn build_spinner_row<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let spinners = ctx.state.spinner_row();
    if spinners.is_empty() {
        return None;
    }

    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(
            text(ctx.i18n.tr("showcase-spinners-label"))
                .size(typography::CAPTION)
                .width(Length::Fixed(sizing::SHOWCASE_LABEL_WIDTH)),
        );
    for spinner in spinners {
        if let Some(element) = spinner.view() {
            row = row.push(element);
        }
    }

    Some(row.into())
}

fn build_status_line<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let line = match ctx.state.last_pressed() {
        Some(id) => ctx.i18n.tr_with_args("showcase-last-pressed", &[("id", id)]),
        None => ctx.i18n.tr("showcase-nothing-pressed"),
    };
    text(line).size(typography::CAPTION).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn french() -> I18n {
        I18n::new(Some("fr".to_string()), &Config::default())
    }

    #[test]
    fn pick_list_options_are_translated() {
        let i18n = french();
        assert_eq!(size_choice(&i18n, Size::Large).to_string(), "Grande");
        assert_eq!(
            catalog_choice(&i18n, CatalogKind::Minimal).to_string(),
            "Minimal"
        );
        assert_eq!(theme_choice(&i18n, ThemeMode::System).to_string(), "Système");
    }

    #[test]
    fn every_option_has_a_translation() {
        for locale in ["en-US", "fr"] {
            let i18n = I18n::new(Some(locale.to_string()), &Config::default());
            let labels = Size::ALL
                .map(|size| size_choice(&i18n, size).label)
                .into_iter()
                .chain(CatalogKind::ALL.map(|c| catalog_choice(&i18n, c).label))
                .chain(ThemeMode::ALL.map(|m| theme_choice(&i18n, m).label));
            for label in labels {
                assert!(!label.starts_with("MISSING"), "{locale}: {label}");
            }
        }
    }

    #[test]
    fn choices_compare_by_value() {
        let english = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(size_choice(&english, Size::Tiny), size_choice(&french(), Size::Tiny));
        assert_ne!(size_choice(&english, Size::Tiny), size_choice(&english, Size::Small));
    }
}
