// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the collaborators of the lifecycle.
//!
//! The controller never draws, measures the device or plays cues itself.
//! Hosts plug adapters into these traits when constructing a
//! [`crate::lifecycle::LifecycleController`].
//!
//! # Available Ports
//!
//! - [`surface`]: overlay surface attached above the host's views
//! - [`geometry`]: safe-area insets of the device
//! - [`feedback`]: haptic cues and sound effects
//!
//! # Design Notes
//!
//! - Traits use crate types only (no iced handles)
//! - Fallible methods return the crate [`Result`](crate::error::Result)
//! - Everything runs on the host's event loop; no `async fn`

pub mod feedback;
pub mod geometry;
pub mod surface;

pub use feedback::{Feedback, LogFeedback, SilentFeedback};
pub use geometry::{EdgeInsetsProvider, FixedInsets};
pub use surface::{LayeredSurface, Surface, SurfaceHandle};
