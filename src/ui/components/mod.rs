// SPDX-License-Identifier: MPL-2.0
//! Presentational components.
//!
//! Each component is a props value with a `view()` that turns it into an Iced
//! element, plus `classes()` describing the same decision as style tokens.
//! None of them keep state between renders.
//!
//! # Components
//!
//! - [`button`] - Styled button with icons, disabled and loading states
//! - [`spinner`] - Loading glyph, absent when nothing loads
//! - [`overlay`] - Full-area loading veil wrapping a spinner

pub mod button;
pub mod overlay;
pub mod spinner;

pub use button::{Button, ButtonKind, DisplayMode, IconPlacement};
pub use overlay::Overlay;
pub use spinner::{Spinner, SpinnerColor};
