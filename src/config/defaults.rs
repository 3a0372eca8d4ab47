// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

use crate::ui::showcase::CatalogKind;
use crate::ui::size::Size;
use crate::ui::theming::ThemeMode;

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Button size the showcase starts with.
pub const DEFAULT_SIZE: Size = Size::Medium;

/// Catalog the showcase starts with.
pub const DEFAULT_CATALOG: CatalogKind = CatalogKind::Showcase;

/// Theme mode when none is configured.
pub const DEFAULT_THEME_MODE: ThemeMode = ThemeMode::System;
