// SPDX-License-Identifier: MPL-2.0
//! Bulletin requests and the priority queue that orders them.
//!
//! # Components
//!
//! - [`request`] - `Bulletin` struct, priorities, durations, positions and
//!   style presets (banner, alert, HUD, sheet, ...)
//! - [`queue`] - `PriorityQueue` with admission and eviction rules
//!
//! # Usage
//!
//! ```
//! use iced_bulletin::bulletin::{Bulletin, Priority, PriorityQueue};
//!
//! let mut queue = PriorityQueue::new();
//! queue.admit(Bulletin::new("low").with_priority(Priority::Low));
//!
//! // A lone lower-priority bulletin is pushed off by a higher one.
//! let evicted = queue.admit(Bulletin::new("high").with_priority(Priority::High));
//! assert_eq!(evicted.map(|b| *b.content()), Some("low"));
//! ```

pub mod queue;
pub mod request;

pub use queue::PriorityQueue;
pub use request::{
    AnimationSettings, BackgroundEffect, Bulletin, BulletinDuration, BulletinId, FeedbackSettings,
    FeedbackStyle, ImpactStyle, NotificationKind, Position, Priority, StyleSettings, WindowLevel,
};
