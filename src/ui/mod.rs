// SPDX-License-Identifier: MPL-2.0
//! iced adapter for the bulletin core and shared UI infrastructure.
//!
//! - [`overlay`] - Canvas drawing the bulletin and mapping mouse input to
//!   gestures
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`styles`] - Container styles used by the demo

pub mod design_tokens;
pub mod overlay;
pub mod styles;
pub mod theming;
