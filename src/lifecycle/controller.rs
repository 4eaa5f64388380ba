// SPDX-License-Identifier: MPL-2.0
//! The lifecycle controller: queue, session and event sequencing.

use super::event::{BulletinEvent, DismissOptions, HitTarget, LifecycleState};
use super::modal::{ModalKind, ModalRoute};
use super::session::{AfterExit, Phase, Session};
use crate::bulletin::{
    BackgroundEffect, Bulletin, BulletinId, FeedbackStyle, Position, PriorityQueue, WindowLevel,
};
use crate::domain::{StretchDamping, TouchScale, VelocityThreshold};
use crate::gesture::{GestureConfig, Release};
use crate::port::{EdgeInsetsProvider, Feedback, Surface};
use crate::presentation::{AnimatorTiming, Frame, PresentationAnimator, TransitionKind};
use iced::{Padding, Point, Rectangle, Size};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Tunables shared by every bulletin the controller presents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerSettings {
    pub timing: AnimatorTiming,
    pub stretch_damping: StretchDamping,
    pub touch_scale: TouchScale,
    pub velocity_threshold: VelocityThreshold,
}

/// Why a dismissal started; decides which event follows `WillDisappear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DismissReason {
    Requested,
    Automatic,
    Interactive,
    Evicted,
    Action,
}

/// A submission waiting for its delay to elapse.
#[derive(Debug)]
struct Delayed<T> {
    due: Instant,
    bulletin: Bulletin<T>,
}

/// Owns the bulletin queue and the bulletin on screen.
///
/// The controller is driven entirely by its caller: every operation takes the
/// current instant, and [`tick`](Self::tick) must be called from the host's
/// event loop (at least by [`next_deadline`](Self::next_deadline)) for
/// timers and animations to make progress.
pub struct LifecycleController<T> {
    settings: ControllerSettings,
    queue: PriorityQueue<T>,
    /// Displayed bulletin pushed off the queue while its exit runs.
    detached: Option<Bulletin<T>>,
    delayed: Vec<Delayed<T>>,
    session: Option<Session>,
    events: Vec<BulletinEvent<T>>,
    surface: Box<dyn Surface>,
    insets: Box<dyn EdgeInsetsProvider>,
    feedback: Box<dyn Feedback>,
}

impl<T> LifecycleController<T> {
    #[must_use]
    pub fn new(
        settings: ControllerSettings,
        surface: impl Surface + 'static,
        insets: impl EdgeInsetsProvider + 'static,
        feedback: impl Feedback + 'static,
    ) -> Self {
        Self {
            settings,
            queue: PriorityQueue::new(),
            detached: None,
            delayed: Vec::new(),
            session: None,
            events: Vec::new(),
            surface: Box::new(surface),
            insets: Box::new(insets),
            feedback: Box::new(feedback),
        }
    }

    /// Replaces the tunables. Takes effect from the next presentation.
    pub fn set_settings(&mut self, settings: ControllerSettings) {
        self.settings = settings;
    }

    #[must_use]
    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Submits a bulletin.
    ///
    /// The bulletin is admitted into the queue; if admission evicts the
    /// bulletin on screen, that one is dismissed and the new top presented
    /// once its exit completes. Other evicted bulletins are dropped.
    pub fn enqueue(&mut self, bulletin: Bulletin<T>, now: Instant) {
        tracing::debug!(
            id = %bulletin.id(),
            priority = ?bulletin.priority,
            queued = self.queue.len(),
            "enqueue bulletin"
        );

        if let Some(evicted) = self.queue.admit(bulletin) {
            self.handle_eviction(evicted, now);
        }

        match self.session.as_mut() {
            Some(session) if session.is_dismissing() => {
                session.after_exit = AfterExit::PresentNext;
            }
            Some(_) => {}
            None => self.present_top(now),
        }
    }

    /// Submits a bulletin once `delay` has elapsed.
    ///
    /// The bulletin is enqueued by the first [`tick`](Self::tick) at or after
    /// `now + delay`. A delay that overflows the clock drops the submission.
    pub fn enqueue_after(&mut self, bulletin: Bulletin<T>, delay: Duration, now: Instant) {
        if delay.is_zero() {
            self.enqueue(bulletin, now);
            return;
        }
        let Some(due) = now.checked_add(delay) else {
            tracing::debug!(id = %bulletin.id(), ?delay, "delay out of range, bulletin dropped");
            return;
        };
        tracing::debug!(id = %bulletin.id(), ?delay, "delay bulletin");
        self.delayed.push(Delayed { due, bulletin });
    }

    // ------------------------------------------------------------------
    // Dismissal
    // ------------------------------------------------------------------

    /// Dismisses the bulletin on screen and advances the queue afterwards.
    pub fn dismiss(&mut self, id: BulletinId, now: Instant) {
        self.dismiss_with(id, DismissOptions::default(), now);
    }

    /// Dismisses the bulletin on screen.
    ///
    /// Only the displayed bulletin can be dismissed; stale ids and repeated
    /// calls are ignored. With `advance_queue` off, waiting bulletins stay
    /// queued until [`resume`](Self::resume) or the next
    /// [`enqueue`](Self::enqueue).
    pub fn dismiss_with(&mut self, id: BulletinId, options: DismissOptions, now: Instant) {
        if self.session.as_ref().map(|s| s.id) != Some(id) {
            tracing::debug!(%id, "dismiss ignored: bulletin not on screen");
            return;
        }
        let after_exit = if options.advance_queue {
            AfterExit::PresentNext
        } else {
            AfterExit::Hold
        };
        self.begin_dismissal(DismissReason::Requested, options.velocity_y, after_exit, now);
    }

    /// Presents the top of the queue if nothing is on screen.
    pub fn resume(&mut self, now: Instant) {
        if self.session.is_some() {
            tracing::trace!("resume ignored: a bulletin is on screen");
            return;
        }
        self.present_top(now);
    }

    // ------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------

    /// Advances delayed submissions, animations and timers to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.admit_due(now);

        // A completed exit may present the next bulletin, whose enter can
        // itself complete immediately when its duration is zero.
        while self.poll_animation(now) {}

        let timer_due = self
            .session
            .as_ref()
            .is_some_and(|s| !s.is_dismissing() && s.timer.is_due(now));
        if timer_due {
            self.begin_dismissal(DismissReason::Automatic, 0.0, AfterExit::PresentNext, now);
        }
    }

    fn admit_due(&mut self, now: Instant) {
        if self.delayed.iter().all(|d| d.due > now) {
            return;
        }
        let (mut due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.delayed)
            .into_iter()
            .partition(|d| d.due <= now);
        self.delayed = waiting;
        due.sort_by_key(|d| d.due);
        for delayed in due {
            self.enqueue(delayed.bulletin, now);
        }
    }

    /// Handles one finished transition. Returns whether anything changed.
    fn poll_animation(&mut self, now: Instant) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(completion) = session.animator.poll(now) else {
            return false;
        };

        match completion.kind {
            TransitionKind::Enter => {
                session.phase = Phase::Displayed;
                tracing::debug!(id = %session.id, "bulletin displayed");
                self.events.push(BulletinEvent::DidAppear(session.id));
            }
            TransitionKind::Exit => self.finish_exit(now),
            TransitionKind::SnapBack => {
                tracing::trace!(id = %session.id, "snap back finished");
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    /// A drag started on the bulletin. Cancels the auto-dismiss timer.
    pub fn pan_began(&mut self, now: Instant) {
        self.complete_enter();
        let Some(session) = self.interactive_session() else {
            return;
        };
        if !session.gesture.begin() {
            tracing::trace!(id = %session.id, "pan ignored");
            return;
        }
        session.timer.cancel();
        let scale = session.gesture.config().touch_scale.value();
        let offset_y = session.animator.frame_at(now).offset_y;
        session.animator.track(offset_y, scale);
    }

    /// The drag moved; `translation_y` is relative to where it started.
    pub fn pan_changed(&mut self, translation_y: f32) {
        let Some(session) = self.interactive_session() else {
            return;
        };
        if let Some(live) = session.gesture.update(translation_y) {
            session.animator.track(live.offset_y, live.scale);
        }
    }

    /// The drag ended with the given translation and velocity (px/s).
    pub fn pan_ended(&mut self, translation_y: f32, velocity_y: f32, now: Instant) {
        let Some(session) = self.interactive_session() else {
            return;
        };
        match session.gesture.end(translation_y, velocity_y) {
            Some(Release::Dismiss { velocity_y }) => {
                self.begin_dismissal(
                    DismissReason::Interactive,
                    velocity_y,
                    AfterExit::PresentNext,
                    now,
                );
            }
            Some(Release::SnapBack) => {
                session
                    .animator
                    .snap_back(session.presentation.uses_spring(), now);
                session.timer.arm(now);
                let cue = session.style.stretching_enabled.then_some(session.feedback.snapping);
                tracing::trace!(id = %session.id, "snap back");
                if let Some(cue) = cue {
                    self.play_cue(cue);
                }
            }
            None => {}
        }
    }

    /// The bulletin was tapped. Tappable bulletins leave the screen and then
    /// report [`BulletinEvent::Action`].
    pub fn tap(&mut self, now: Instant) {
        let Some(session) = self.interactive_session() else {
            return;
        };
        if !session.action {
            tracing::trace!(id = %session.id, "tap ignored: no action");
            return;
        }
        session.pending_action = true;
        let cue = session.feedback.action;
        self.play_cue(cue);
        self.begin_dismissal(DismissReason::Action, 0.0, AfterExit::PresentNext, now);
    }

    /// A pointer went down on the bulletin.
    pub fn press_began(&mut self, now: Instant) {
        let touch_scale = self.settings.touch_scale.value();
        let Some(session) = self.interactive_session() else {
            return;
        };
        session.pressed = true;
        if session.phase == Phase::Displayed
            && session.animates_touch()
            && !session.gesture.is_dragging()
        {
            let offset_y = session.animator.frame_at(now).offset_y;
            session.animator.track(offset_y, touch_scale);
        }
    }

    /// The pointer went up; the bulletin eases back to full size.
    pub fn press_ended(&mut self, now: Instant) {
        let Some(session) = self.interactive_session() else {
            return;
        };
        if !std::mem::take(&mut session.pressed) {
            return;
        }
        if session.phase == Phase::Displayed
            && session.animates_touch()
            && !session.gesture.is_dragging()
            && session.animator.running().is_none()
        {
            session.animator.snap_back(false, now);
        }
    }

    /// The backdrop around the bulletin was tapped.
    pub fn background_tap(&mut self, now: Instant) {
        let Some(session) = self.interactive_session() else {
            return;
        };
        let dismissible = session.style.background != BackgroundEffect::None
            && session.style.background_dismiss_enabled;
        if !dismissible {
            tracing::trace!(id = %session.id, "background tap ignored");
            return;
        }
        self.begin_dismissal(DismissReason::Interactive, 0.0, AfterExit::PresentNext, now);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.session
            .as_ref()
            .map_or(LifecycleState::Idle, |s| s.phase.into())
    }

    /// The bulletin on screen, if any.
    #[must_use]
    pub fn displayed(&self) -> Option<&Bulletin<T>> {
        let id = self.session.as_ref()?.id;
        match &self.detached {
            Some(bulletin) if bulletin.id() == id => Some(bulletin),
            _ => self.queue.iter().find(|b| b.id() == id),
        }
    }

    /// Number of bulletins waiting in the queue (excluding the one on screen
    /// and delayed submissions).
    #[must_use]
    pub fn queued_len(&self) -> usize {
        let on_screen_queued = self
            .session
            .as_ref()
            .is_some_and(|s| self.queue.contains(s.id));
        self.queue.len() - usize::from(on_screen_queued)
    }

    /// Number of submissions waiting for their delay.
    #[must_use]
    pub fn delayed_len(&self) -> usize {
        self.delayed.len()
    }

    /// The queue, bottom to top, for diagnostics.
    #[must_use]
    pub fn queue(&self) -> &PriorityQueue<T> {
        &self.queue
    }

    /// Visual state of the bulletin on screen.
    #[must_use]
    pub fn current_frame(&self, now: Instant) -> Option<Frame> {
        self.session.as_ref().map(|s| s.animator.frame_at(now))
    }

    /// Rectangle covered by the bulletin within `viewport`, with the current
    /// frame's translation and scale applied.
    #[must_use]
    pub fn bulletin_bounds(&self, viewport: Rectangle, now: Instant) -> Option<Rectangle> {
        let session = self.session.as_ref()?;
        let frame = session.animator.frame_at(now);
        let insets = session.insets;

        let width = (viewport.width - insets.left - insets.right).max(0.0);
        let height = session.height;
        let x = viewport.x + insets.left;
        let y = match session.position {
            Position::Top => viewport.y + insets.top,
            Position::Bottom => viewport.y + viewport.height - insets.bottom - height,
            Position::Center => viewport.center_y() - height / 2.0,
        } + frame.offset_y;

        let scaled = Size::new(width * frame.scale, height * frame.scale);
        Some(Rectangle {
            x: x + (width - scaled.width) / 2.0,
            y: y + (height - scaled.height) / 2.0,
            width: scaled.width,
            height: scaled.height,
        })
    }

    /// Which part of the overlay, if any, receives a pointer at `point`.
    ///
    /// `None` means the pointer passes through to the host.
    #[must_use]
    pub fn hit_test(&self, point: Point, viewport: Rectangle, now: Instant) -> Option<HitTarget> {
        let session = self.session.as_ref()?;
        if self
            .bulletin_bounds(viewport, now)
            .is_some_and(|bounds| bounds.contains(point))
        {
            return Some(HitTarget::Bulletin);
        }
        (session.style.background != BackgroundEffect::None).then_some(HitTarget::Backdrop)
    }

    /// Whether anything is on screen, queued or delayed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some() || !self.queue.is_empty() || !self.delayed.is_empty()
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let session = self.session.as_ref();
        let animation = session.and_then(|s| s.animator.deadline());
        let timer = session
            .filter(|s| !s.is_dismissing())
            .and_then(|s| s.timer.deadline());
        let delayed = self.delayed.iter().map(|d| d.due).min();

        [animation, timer, delayed].into_iter().flatten().min()
    }

    /// When the auto-dismiss timer of the bulletin on screen fires.
    #[must_use]
    pub fn dismiss_deadline(&self) -> Option<Instant> {
        self.session.as_ref().and_then(|s| s.timer.deadline())
    }

    /// Where the host should present a modal of the given kind.
    #[must_use]
    pub fn route_modal(&self, kind: ModalKind) -> ModalRoute {
        match (kind, self.session.as_ref()) {
            (ModalKind::Alert, Some(session)) if session.level < WindowLevel::Alert => {
                ModalRoute::Overlay(session.handle)
            }
            _ => ModalRoute::Host,
        }
    }

    /// Takes every event reported since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<BulletinEvent<T>> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------
    // Sequencing
    // ------------------------------------------------------------------

    fn handle_eviction(&mut self, evicted: Bulletin<T>, now: Instant) {
        let id = evicted.id();
        self.events.push(BulletinEvent::Evicted(id));

        let Some(session) = self.session.as_mut() else {
            tracing::debug!(%id, "evicted queued bulletin");
            return;
        };
        if session.id != id {
            tracing::debug!(%id, "evicted queued bulletin");
            return;
        }

        tracing::debug!(%id, "evicted bulletin on screen");
        self.detached = Some(evicted);
        if session.is_dismissing() {
            session.after_exit = AfterExit::PresentNext;
        } else {
            self.begin_dismissal(DismissReason::Evicted, 0.0, AfterExit::PresentNext, now);
        }
    }

    fn present_top(&mut self, now: Instant) {
        let Some(bulletin) = self.queue.peek_top() else {
            tracing::trace!("queue empty, nothing to present");
            return;
        };

        let safe_area = self.insets.edge_insets(bulletin.position);
        let insets = effective_insets(bulletin.style.edge_insets, safe_area);
        let edge_inset = match bulletin.position {
            Position::Top => insets.top,
            Position::Bottom => insets.bottom,
            Position::Center => 0.0,
        };
        let gesture = GestureConfig {
            position: bulletin.position,
            height: bulletin.height,
            edge_inset,
            stretching_enabled: bulletin.style.stretching_enabled,
            stretch_damping: self.settings.stretch_damping,
            touch_scale: if bulletin.style.animated_touch_enabled {
                self.settings.touch_scale
            } else {
                TouchScale::none()
            },
            velocity_threshold: self.settings.velocity_threshold,
        };

        let handle = self.surface.attach(bulletin.level);
        let mut session = Session::new(
            bulletin,
            handle,
            insets,
            PresentationAnimator::new(self.settings.timing),
            gesture,
        );
        session
            .animator
            .animate_in(&session.placement, &bulletin.presentation, now);
        session.timer.arm(now);

        let cue = bulletin.feedback.presentation;
        let sound = bulletin.sound.clone();
        tracing::debug!(
            id = %session.id,
            level = ?session.level,
            position = ?session.position,
            %handle,
            "presenting bulletin"
        );
        self.events.push(BulletinEvent::WillAppear(session.id));
        self.session = Some(session);

        self.play_cue(cue);
        if let Some(path) = sound {
            self.play_sound(path);
        }
    }

    fn begin_dismissal(
        &mut self,
        reason: DismissReason,
        velocity_y: f32,
        after_exit: AfterExit,
        now: Instant,
    ) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.is_dismissing() {
            tracing::trace!(id = %session.id, "already dismissing");
            return;
        }

        session.phase = Phase::Dismissing;
        session.after_exit = after_exit;
        session.timer.cancel();
        session.gesture.cancel();
        session.animator.animate_out(&session.placement, velocity_y, now);

        let id = session.id;
        tracing::debug!(%id, ?reason, "dismissing bulletin");
        self.events.push(BulletinEvent::WillDisappear(id));
        match reason {
            DismissReason::Automatic => self.events.push(BulletinEvent::AutomaticallyDismissed(id)),
            DismissReason::Interactive => {
                self.events.push(BulletinEvent::InteractivelyDismissed(id));
            }
            DismissReason::Requested | DismissReason::Evicted | DismissReason::Action => {}
        }
    }

    fn finish_exit(&mut self, now: Instant) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.surface.detach(session.handle);

        let bulletin = match self.detached.take() {
            Some(bulletin) if bulletin.id() == session.id => Some(bulletin),
            other => {
                self.detached = other;
                self.queue.remove(session.id)
            }
        };

        tracing::debug!(id = %session.id, remaining = self.queue.len(), "bulletin dismissed");
        self.events.push(BulletinEvent::Dismissed(session.id));
        if session.pending_action {
            if let Some(bulletin) = bulletin {
                self.events.push(BulletinEvent::Action {
                    id: session.id,
                    content: bulletin.into_content(),
                });
            }
        }

        match session.after_exit {
            AfterExit::PresentNext => self.present_top(now),
            AfterExit::Hold => {
                tracing::debug!(waiting = self.queue.len(), "queue held");
            }
        }
    }

    /// Jumps a running enter to its end so that gestures start from rest.
    fn complete_enter(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase != Phase::Presenting {
            return;
        }
        if session.animator.running() == Some(TransitionKind::Enter) {
            session.animator.finish();
        }
        session.phase = Phase::Displayed;
        self.events.push(BulletinEvent::DidAppear(session.id));
    }

    /// The session if it can still react to input.
    fn interactive_session(&mut self) -> Option<&mut Session> {
        match self.session.as_mut() {
            Some(session) if !session.is_dismissing() => Some(session),
            Some(session) => {
                tracing::trace!(id = %session.id, "input ignored while dismissing");
                None
            }
            None => {
                tracing::trace!("input ignored: nothing on screen");
                None
            }
        }
    }

    fn play_cue(&mut self, style: FeedbackStyle) {
        if style == FeedbackStyle::None {
            return;
        }
        if let Err(err) = self.feedback.play(style) {
            tracing::warn!(%err, ?style, "feedback cue failed");
        }
    }

    fn play_sound(&mut self, path: PathBuf) {
        if let Err(err) = self.feedback.play_sound(&path) {
            tracing::warn!(%err, path = %path.display(), "sound effect failed");
        }
    }
}

impl<T> std::fmt::Debug for LifecycleController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleController")
            .field("state", &self.state())
            .field("queue", &self.queue.to_string())
            .field("delayed", &self.delayed.len())
            .field("events", &self.events.len())
            .finish_non_exhaustive()
    }
}

/// Bulletin insets plus the device safe area.
fn effective_insets(style: Padding, safe_area: Padding) -> Padding {
    Padding {
        top: style.top + safe_area.top,
        right: style.right + safe_area.right,
        bottom: style.bottom + safe_area.bottom,
        left: style.left + safe_area.left,
    }
}
