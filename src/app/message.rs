// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::showcase::{self, CatalogKind};
use crate::ui::size::Size;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Showcase(showcase::Message),
    /// Periodic tick driving spinner rotation.
    Tick(Instant),
}

/// Runtime flags passed from the command line. Each set value overrides the
/// config file for the session.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    pub size: Option<Size>,
    pub catalog: Option<CatalogKind>,
    pub theme: Option<ThemeMode>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SWATCH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
