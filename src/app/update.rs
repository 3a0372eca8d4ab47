// SPDX-License-Identifier: MPL-2.0
//! Applies showcase events to the application and persists preferences.

use super::App;
use crate::config;
use crate::ui::showcase::Event;

impl App {
    pub(super) fn handle_showcase_event(&mut self, event: Event) {
        match event {
            Event::None => return,
            Event::SizeChanged(size) => {
                tracing::info!(%size, "size changed");
                self.config.showcase.size = size;
            }
            Event::CatalogChanged(catalog) => {
                tracing::info!(%catalog, "catalog changed");
                self.config.showcase.catalog = catalog;
            }
            Event::ThemeChanged(mode) => {
                self.theme_mode = mode;
                self.config.general.theme_mode = mode;
            }
            Event::LanguageChanged(locale) => {
                if !self.i18n.set_locale(locale.clone()) {
                    return;
                }
                tracing::info!(%locale, "language changed");
                self.config.general.language = Some(locale.to_string());
            }
        }
        self.persist_config();
    }

    fn persist_config(&self) {
        if !self.persist {
            return;
        }
        if let Err(err) = config::save(&self.config) {
            tracing::warn!(error = %err, "failed to save config");
        }
    }
}
