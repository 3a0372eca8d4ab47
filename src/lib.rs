// SPDX-License-Identifier: MPL-2.0
//! `iced_swatch` is a small presentational component kit for the Iced GUI
//! framework: a styled button, a loading spinner and a loading overlay, plus
//! a showcase application exercising their variants.
//!
//! It also demonstrates internationalization with Fluent and user preference
//! management.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
