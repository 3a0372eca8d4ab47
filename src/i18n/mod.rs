// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations live in `assets/i18n/<locale>.ftl` and are embedded into the
//! binary at compile time. The active locale is resolved from the CLI, then
//! the config file, then the OS, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
