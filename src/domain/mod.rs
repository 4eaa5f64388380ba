// SPDX-License-Identifier: MPL-2.0
//! Domain value types shared by the presentation core.
//!
//! These types carry no iced or platform dependencies and are safe to use
//! from any layer.

pub mod newtypes;

pub use newtypes::{AnimationSeconds, StretchDamping, TouchScale, VelocityThreshold};
