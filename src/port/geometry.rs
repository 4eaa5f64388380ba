// SPDX-License-Identifier: MPL-2.0
//! Device geometry port.

use crate::bulletin::Position;
use iced::Padding;

/// Supplies the safe-area insets of the device (notch, status bar, home
/// indicator). They are added to each bulletin's own edge insets.
pub trait EdgeInsetsProvider {
    fn edge_insets(&self, position: Position) -> Padding;
}

/// Constant insets, whatever the position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedInsets(pub Padding);

impl FixedInsets {
    /// No safe area at all.
    #[must_use]
    pub fn none() -> Self {
        Self(Padding::ZERO)
    }

    /// Only a top inset, e.g. a status bar strip.
    #[must_use]
    pub fn top(height: f32) -> Self {
        Self(Padding {
            top: height,
            ..Padding::ZERO
        })
    }
}

impl EdgeInsetsProvider for FixedInsets {
    fn edge_insets(&self, _position: Position) -> Padding {
        self.0
    }
}
