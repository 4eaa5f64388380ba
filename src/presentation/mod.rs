// SPDX-License-Identifier: MPL-2.0
//! Enter/exit animation of the bulletin on screen.
//!
//! - Top and bottom bulletins slide in from beyond their resting edge.
//! - Center bulletins grow from 85% scale while fading in.
//! - The backdrop (darken/blur) fades on the same timeline.

mod animator;
mod easing;
mod timing;

pub use animator::{
    Completion, CompletionToken, Frame, Placement, PresentationAnimator, TransitionKind,
};
pub use easing::Curve;
pub use timing::AnimatorTiming;
