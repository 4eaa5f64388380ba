// SPDX-License-Identifier: MPL-2.0
//! Bulletin lifecycle: which bulletin is on screen and how it comes and goes.
//!
//! # Components
//!
//! - [`LifecycleController`] - owns the queue and the bulletin on screen,
//!   sequences presentation, auto-dismissal, interactive dismissal and
//!   eviction
//! - [`BulletinEvent`] - what happened, drained by the host after each call
//! - [`ModalKind`] / [`ModalRoute`] - where host modals go while a bulletin is
//!   up
//!
//! # Usage
//!
//! ```
//! use iced_bulletin::bulletin::Bulletin;
//! use iced_bulletin::lifecycle::{ControllerSettings, LifecycleController, LifecycleState};
//! use iced_bulletin::port::{FixedInsets, LayeredSurface, SilentFeedback};
//! use std::time::{Duration, Instant};
//!
//! let mut controller = LifecycleController::new(
//!     ControllerSettings::default(),
//!     LayeredSurface::new(),
//!     FixedInsets::none(),
//!     SilentFeedback,
//! );
//!
//! let now = Instant::now();
//! controller.enqueue(Bulletin::banner("Saved", false), now);
//! assert_eq!(controller.state(), LifecycleState::Presenting);
//!
//! controller.tick(now + Duration::from_secs(1));
//! assert_eq!(controller.state(), LifecycleState::Displayed);
//! ```

mod controller;
mod event;
mod modal;
mod session;

pub use controller::{ControllerSettings, LifecycleController};
pub use event::{BulletinEvent, DismissOptions, HitTarget, LifecycleState};
pub use modal::{ModalKind, ModalRoute};
