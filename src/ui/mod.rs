// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: screens own
//! their state, components are built fresh on every render.
//!
//! # Screens
//!
//! - [`showcase`] - Button, spinner and overlay catalog
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Button, spinner and overlay
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`size`] - The tiny..giant size scale shared by every component
//! - [`class_list`] - Style token lists describing a rendered state
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon lookup and rendering

pub mod class_list;
pub mod components;
pub mod design_tokens;
pub mod icons;
pub mod showcase;
pub mod size;
pub mod styles;
pub mod theming;
