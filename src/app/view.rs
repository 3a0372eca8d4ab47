// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::showcase::{self, State as ShowcaseState};
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub showcase: &'a ShowcaseState,
    pub theme_mode: ThemeMode,
    /// Translation key of a startup warning, if any.
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let showcase_view = showcase::view(showcase::ViewContext {
        i18n: ctx.i18n,
        state: ctx.showcase,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Showcase);

    let mut column = Column::new();
    if let Some(key) = ctx.warning {
        column = column.push(
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::LG]),
        );
    }

    Container::new(column.push(showcase_view))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
