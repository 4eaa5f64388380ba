// SPDX-License-Identifier: MPL-2.0
//! State of the one bulletin currently on screen.

use super::event::LifecycleState;
use crate::bulletin::{
    AnimationSettings, Bulletin, BulletinId, FeedbackSettings, Position, StyleSettings,
    WindowLevel,
};
use crate::gesture::{GestureConfig, GestureInterpreter};
use crate::port::SurfaceHandle;
use crate::presentation::{Placement, PresentationAnimator};
use std::time::{Duration, Instant};

/// Session phase. `Idle` is represented by the absence of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Presenting,
    Displayed,
    Dismissing,
}

impl From<Phase> for LifecycleState {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Presenting => LifecycleState::Presenting,
            Phase::Displayed => LifecycleState::Displayed,
            Phase::Dismissing => LifecycleState::Dismissing,
        }
    }
}

/// What happens once the exit animation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AfterExit {
    PresentNext,
    Hold,
}

/// Auto-dismiss timer. Cancelling keeps the interval so it can be re-armed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DismissTimer {
    interval: Option<Duration>,
    deadline: Option<Instant>,
}

impl DismissTimer {
    pub(crate) fn new(interval: Option<Duration>) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Arms the timer for its full interval. No-op for `Forever` bulletins.
    ///
    /// An interval past the end of the clock never fires.
    pub(crate) fn arm(&mut self, now: Instant) {
        self.deadline = self.interval.and_then(|interval| now.checked_add(interval));
    }

    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

/// Everything the controller needs about the bulletin on screen.
///
/// Settings are copied out of the bulletin so the session never borrows the
/// queue.
#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) id: BulletinId,
    pub(crate) phase: Phase,
    pub(crate) handle: SurfaceHandle,
    pub(crate) level: WindowLevel,
    pub(crate) position: Position,
    pub(crate) height: f32,
    pub(crate) insets: iced::Padding,
    pub(crate) placement: Placement,
    pub(crate) animator: PresentationAnimator,
    pub(crate) gesture: GestureInterpreter,
    pub(crate) timer: DismissTimer,
    pub(crate) presentation: AnimationSettings,
    pub(crate) style: StyleSettings,
    pub(crate) feedback: FeedbackSettings,
    pub(crate) action: bool,
    pub(crate) pressed: bool,
    pub(crate) pending_action: bool,
    pub(crate) after_exit: AfterExit,
}

impl Session {
    /// Builds the session for a bulletin about to be presented.
    ///
    /// `insets` are the effective insets (bulletin style plus device safe
    /// area).
    pub(crate) fn new<T>(
        bulletin: &Bulletin<T>,
        handle: SurfaceHandle,
        insets: iced::Padding,
        animator: PresentationAnimator,
        gesture: GestureConfig,
    ) -> Self {
        Self {
            id: bulletin.id(),
            phase: Phase::Presenting,
            handle,
            level: bulletin.level,
            position: bulletin.position,
            height: bulletin.height,
            insets,
            placement: Placement {
                position: bulletin.position,
                height: bulletin.height,
                edge_inset: gesture.edge_inset,
                shadow_allowance: bulletin.style.shadow_allowance(),
            },
            animator,
            gesture: GestureInterpreter::new(gesture),
            timer: DismissTimer::new(bulletin.duration.auto_dismiss_after()),
            presentation: bulletin.presentation,
            style: bulletin.style,
            feedback: bulletin.feedback,
            action: bulletin.action,
            pressed: false,
            pending_action: false,
            after_exit: AfterExit::PresentNext,
        }
    }

    pub(crate) fn is_dismissing(&self) -> bool {
        self.phase == Phase::Dismissing
    }

    /// Whether touches should shrink the bulletin.
    pub(crate) fn animates_touch(&self) -> bool {
        self.style.animated_touch_enabled && self.position != Position::Center
    }
}
