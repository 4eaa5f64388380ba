// SPDX-License-Identifier: MPL-2.0
//! Enter/exit timelines for the bulletin on screen.
//!
//! The animator holds at most one transition. Frames are sampled on demand
//! with [`PresentationAnimator::frame_at`]; completion is reported by
//! [`PresentationAnimator::poll`], which yields each transition exactly once.

use super::easing::Curve;
use super::timing::AnimatorTiming;
use crate::bulletin::{AnimationSettings, Position};
use crate::config::CENTER_START_SCALE;
use std::time::{Duration, Instant};

/// Visual state of the bulletin and its backdrop at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Vertical translation from the resting position (px, down is positive).
    pub offset_y: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Opacity of the background effect.
    pub backdrop: f32,
}

impl Frame {
    /// Resting, fully visible frame.
    pub const IDENTITY: Frame = Frame {
        offset_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
        backdrop: 1.0,
    };

    fn lerp(from: Frame, to: Frame, progress: f32) -> Frame {
        let mix = |a: f32, b: f32| a + (b - a) * progress;
        Frame {
            offset_y: mix(from.offset_y, to.offset_y),
            scale: mix(from.scale, to.scale),
            opacity: mix(from.opacity, to.opacity).clamp(0.0, 1.0),
            backdrop: mix(from.backdrop, to.backdrop).clamp(0.0, 1.0),
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::IDENTITY
    }
}

/// Where the bulletin rests and how far it travels to leave the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Position,
    pub height: f32,
    /// Inset between the resting edge and the bulletin.
    pub edge_inset: f32,
    pub shadow_allowance: f32,
}

impl Placement {
    /// Unsigned distance between the resting position and off-screen.
    #[must_use]
    pub fn travel_distance(&self) -> f32 {
        match self.position {
            Position::Center => 0.0,
            Position::Top | Position::Bottom => {
                self.height + self.edge_inset + self.shadow_allowance
            }
        }
    }

    /// Frame of the bulletin before it enters / after it leaves.
    #[must_use]
    pub fn hidden_frame(&self) -> Frame {
        match self.position {
            Position::Center => Frame {
                offset_y: 0.0,
                scale: CENTER_START_SCALE,
                opacity: 0.0,
                backdrop: 0.0,
            },
            Position::Top => Frame {
                offset_y: -self.travel_distance(),
                backdrop: 0.0,
                ..Frame::IDENTITY
            },
            Position::Bottom => Frame {
                offset_y: self.travel_distance(),
                backdrop: 0.0,
                ..Frame::IDENTITY
            },
        }
    }

    /// Component of a vertical velocity pointing toward the exit edge.
    #[must_use]
    pub fn velocity_toward_exit(&self, velocity_y: f32) -> f32 {
        match self.position {
            Position::Top => -velocity_y,
            Position::Bottom => velocity_y,
            Position::Center => 0.0,
        }
    }
}

/// Handle identifying one enter/exit/snap-back transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompletionToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Enter,
    Exit,
    SnapBack,
}

/// A finished transition, reported once by [`PresentationAnimator::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub kind: TransitionKind,
    pub token: CompletionToken,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    kind: TransitionKind,
    token: CompletionToken,
    from: Frame,
    to: Frame,
    started_at: Instant,
    duration: Duration,
    curve: Curve,
}

impl Transition {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.curve.progress(t, self.duration.as_secs_f32())
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

/// Drives the frames of a single bulletin.
#[derive(Debug)]
pub struct PresentationAnimator {
    timing: AnimatorTiming,
    resting: Frame,
    transition: Option<Transition>,
    next_token: u64,
}

impl PresentationAnimator {
    #[must_use]
    pub fn new(timing: AnimatorTiming) -> Self {
        Self {
            timing,
            resting: Frame::IDENTITY,
            transition: None,
            next_token: 0,
        }
    }

    /// Starts the enter transition from the hidden frame to identity.
    pub fn animate_in(
        &mut self,
        placement: &Placement,
        settings: &AnimationSettings,
        now: Instant,
    ) -> CompletionToken {
        let curve = if settings.uses_spring() {
            Curve::Spring {
                damping: settings.spring_damping,
                velocity: settings.spring_velocity,
            }
        } else {
            Curve::EaseOut
        };
        let from = placement.hidden_frame();
        self.resting = from;
        self.start(
            TransitionKind::Enter,
            from,
            Frame::IDENTITY,
            settings.duration,
            curve,
            now,
        )
    }

    /// Starts the exit transition from the current frame to hidden.
    ///
    /// `velocity_y` is the pointer release velocity in px/s (zero when the
    /// dismissal is not interactive); it becomes the spring's initial
    /// velocity normalized by the travel distance.
    pub fn animate_out(
        &mut self,
        placement: &Placement,
        velocity_y: f32,
        now: Instant,
    ) -> CompletionToken {
        let from = self.frame_at(now);
        let to = placement.hidden_frame();

        let (duration, curve) = match placement.position {
            Position::Center => (self.timing.center_dismissal, Curve::EaseOut),
            Position::Top | Position::Bottom => {
                let distance = placement.travel_distance();
                let velocity = if distance > 0.0 {
                    placement.velocity_toward_exit(velocity_y) / distance
                } else {
                    0.0
                };
                (
                    self.timing.dismissal,
                    Curve::Spring {
                        damping: self.timing.dismissal_damping,
                        velocity,
                    },
                )
            }
        };

        self.start(TransitionKind::Exit, from, to, duration, curve, now)
    }

    /// Returns the bulletin to rest after an aborted drag.
    pub fn snap_back(&mut self, spring: bool, now: Instant) -> CompletionToken {
        let from = self.frame_at(now);
        let (duration, curve) = if spring {
            (
                self.timing.snap_spring,
                Curve::Spring {
                    damping: self.timing.snap_damping,
                    velocity: self.timing.snap_velocity,
                },
            )
        } else {
            (self.timing.snap_ease, Curve::EaseOut)
        };
        self.start(
            TransitionKind::SnapBack,
            from,
            Frame::IDENTITY,
            duration,
            curve,
            now,
        )
    }

    /// Applies a live transform that tracks the pointer without animating.
    ///
    /// Cancels a running snap back. Enter/exit transitions are left alone;
    /// callers finish them first.
    pub fn track(&mut self, offset_y: f32, scale: f32) {
        if matches!(
            self.transition,
            Some(Transition {
                kind: TransitionKind::SnapBack,
                ..
            })
        ) {
            self.transition = None;
        }
        self.resting = Frame {
            offset_y,
            scale,
            ..Frame::IDENTITY
        };
    }

    /// Jumps the running transition to its end and reports it.
    pub fn finish(&mut self) -> Option<Completion> {
        let transition = self.transition.take()?;
        self.resting = transition.to;
        Some(Completion {
            kind: transition.kind,
            token: transition.token,
        })
    }

    /// Reports the running transition once it has run its full duration.
    pub fn poll(&mut self, now: Instant) -> Option<Completion> {
        if !self.transition.as_ref()?.is_finished(now) {
            return None;
        }
        self.finish()
    }

    /// Samples the current frame.
    #[must_use]
    pub fn frame_at(&self, now: Instant) -> Frame {
        match &self.transition {
            Some(transition) if transition.is_finished(now) => transition.to,
            Some(transition) => {
                Frame::lerp(transition.from, transition.to, transition.progress(now))
            }
            None => self.resting,
        }
    }

    /// Kind of the running transition, if any.
    #[must_use]
    pub fn running(&self) -> Option<TransitionKind> {
        self.transition.map(|t| t.kind)
    }

    /// Instant at which the running transition completes.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.transition.and_then(|t| t.started_at.checked_add(t.duration))
    }

    fn start(
        &mut self,
        kind: TransitionKind,
        from: Frame,
        to: Frame,
        duration: Duration,
        curve: Curve,
        now: Instant,
    ) -> CompletionToken {
        let token = CompletionToken(self.next_token);
        self.next_token += 1;
        self.transition = Some(Transition {
            kind,
            token,
            from,
            to,
            started_at: now,
            duration,
            curve,
        });
        token
    }
}
