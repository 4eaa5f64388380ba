// SPDX-License-Identifier: MPL-2.0
//! Events reported to the host and the public state of the lifecycle.

use crate::bulletin::BulletinId;

/// Something that happened to a bulletin, drained with
/// [`super::LifecycleController::drain_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum BulletinEvent<T> {
    /// The enter animation started.
    WillAppear(BulletinId),
    /// The enter animation completed.
    DidAppear(BulletinId),
    /// The exit animation started.
    WillDisappear(BulletinId),
    /// The auto-dismiss timer fired.
    AutomaticallyDismissed(BulletinId),
    /// A drag or a background tap dismissed the bulletin.
    InteractivelyDismissed(BulletinId),
    /// The exit animation completed and the surface was detached.
    Dismissed(BulletinId),
    /// A newcomer pushed the bulletin off the queue.
    Evicted(BulletinId),
    /// A tappable bulletin was tapped and has left the screen.
    Action { id: BulletinId, content: T },
}

impl<T> BulletinEvent<T> {
    /// Bulletin the event is about.
    #[must_use]
    pub fn id(&self) -> BulletinId {
        match self {
            BulletinEvent::WillAppear(id)
            | BulletinEvent::DidAppear(id)
            | BulletinEvent::WillDisappear(id)
            | BulletinEvent::AutomaticallyDismissed(id)
            | BulletinEvent::InteractivelyDismissed(id)
            | BulletinEvent::Dismissed(id)
            | BulletinEvent::Evicted(id)
            | BulletinEvent::Action { id, .. } => *id,
        }
    }

    /// Short name used in logs and the demo's event list.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            BulletinEvent::WillAppear(_) => "will appear",
            BulletinEvent::DidAppear(_) => "did appear",
            BulletinEvent::WillDisappear(_) => "will disappear",
            BulletinEvent::AutomaticallyDismissed(_) => "automatically dismissed",
            BulletinEvent::InteractivelyDismissed(_) => "interactively dismissed",
            BulletinEvent::Dismissed(_) => "dismissed",
            BulletinEvent::Evicted(_) => "evicted",
            BulletinEvent::Action { .. } => "action",
        }
    }
}

/// Phase of the bulletin on screen, or `Idle` when nothing is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Idle,
    Presenting,
    Displayed,
    Dismissing,
}

/// Options for [`super::LifecycleController::dismiss_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissOptions {
    /// Vertical release velocity (px/s) handed to the exit animation.
    pub velocity_y: f32,
    /// Present the next queued bulletin once the exit completes.
    pub advance_queue: bool,
}

impl Default for DismissOptions {
    fn default() -> Self {
        Self {
            velocity_y: 0.0,
            advance_queue: true,
        }
    }
}

/// Part of the overlay under a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The bulletin card itself.
    Bulletin,
    /// The darkened/blurred backdrop around it.
    Backdrop,
}
