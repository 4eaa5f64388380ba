// SPDX-License-Identifier: MPL-2.0
//! Pan gesture interpretation for the bulletin on screen.
//!
//! Turns raw pointer translations into either a live elastic transform or a
//! release decision (dismiss vs. snap back).

use crate::bulletin::Position;
use crate::domain::{StretchDamping, TouchScale, VelocityThreshold};

/// Thresholds and feel of the drag for one bulletin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub position: Position,
    pub height: f32,
    /// Inset between the resting edge and the bulletin.
    pub edge_inset: f32,
    pub stretching_enabled: bool,
    pub stretch_damping: StretchDamping,
    pub touch_scale: TouchScale,
    pub velocity_threshold: VelocityThreshold,
}

impl GestureConfig {
    /// Displacement toward the exit edge that dismisses on release.
    #[must_use]
    pub fn distance_threshold(&self) -> f32 {
        self.edge_inset + self.height / 2.0
    }
}

/// Translation and scale applied directly while the pointer moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveTransform {
    pub offset_y: f32,
    pub scale: f32,
}

/// Decision taken when the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Leave the screen, carrying the release velocity (px/s, y axis).
    Dismiss { velocity_y: f32 },
    /// Return to rest.
    SnapBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging {
        translation_y: f32,
    },
    SnapBack,
    Released,
}

/// State machine for one bulletin's pan gestures.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    config: GestureConfig,
    phase: GesturePhase,
}

impl GestureInterpreter {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// Starts a drag. Center bulletins cannot be dragged.
    ///
    /// Returns `false` when the gesture is ignored.
    pub fn begin(&mut self) -> bool {
        if self.config.position == Position::Center || self.phase == GesturePhase::Released {
            return false;
        }
        self.phase = GesturePhase::Dragging { translation_y: 0.0 };
        true
    }

    /// Tracks the pointer, returning the transform to apply immediately.
    pub fn update(&mut self, translation_y: f32) -> Option<LiveTransform> {
        if !self.is_dragging() {
            return None;
        }
        self.phase = GesturePhase::Dragging { translation_y };
        Some(self.live_transform(translation_y))
    }

    /// Ends the drag and decides whether the bulletin leaves.
    pub fn end(&mut self, translation_y: f32, velocity_y: f32) -> Option<Release> {
        if !self.is_dragging() {
            return None;
        }

        let displacement = self.displacement(translation_y);
        let toward_exit = self.displacement(velocity_y);
        let dismiss = displacement >= self.config.distance_threshold()
            || self.config.velocity_threshold.is_reached_by(toward_exit);

        if dismiss {
            self.phase = GesturePhase::Released;
            Some(Release::Dismiss { velocity_y })
        } else {
            self.phase = GesturePhase::SnapBack;
            Some(Release::SnapBack)
        }
    }

    /// Abandons a drag without deciding anything.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.phase = GesturePhase::Idle;
        }
    }

    /// Signed displacement along the dismiss axis; positive points toward
    /// the exit edge.
    #[must_use]
    pub fn displacement(&self, translation_y: f32) -> f32 {
        match self.config.position {
            Position::Top => -translation_y,
            Position::Bottom => translation_y,
            Position::Center => 0.0,
        }
    }

    fn live_transform(&self, translation_y: f32) -> LiveTransform {
        let offset_y = if self.displacement(translation_y) >= 0.0 {
            translation_y
        } else if self.config.stretching_enabled {
            self.config.stretch_damping.apply(translation_y)
        } else {
            0.0
        };

        LiveTransform {
            offset_y,
            scale: self.config.touch_scale.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(position: Position) -> GestureConfig {
        GestureConfig {
            position,
            height: 80.0,
            edge_inset: 24.0,
            stretching_enabled: true,
            stretch_damping: StretchDamping::default(),
            touch_scale: TouchScale::default(),
            velocity_threshold: VelocityThreshold::default(),
        }
    }

    fn dragging(position: Position) -> GestureInterpreter {
        let mut gesture = GestureInterpreter::new(config(position));
        assert!(gesture.begin());
        gesture
    }

    #[test]
    fn center_bulletins_ignore_pans() {
        let mut gesture = GestureInterpreter::new(config(Position::Center));
        assert!(!gesture.begin());
        assert!(gesture.update(-20.0).is_none());
        assert!(gesture.end(-200.0, -2000.0).is_none());
    }

    #[test]
    fn drag_toward_exit_tracks_pointer_exactly() {
        let mut gesture = dragging(Position::Top);
        let live = gesture.update(-30.0).unwrap();
        assert_eq!(live.offset_y, -30.0);
        assert_eq!(live.scale, 0.98);
    }

    #[test]
    fn drag_past_rest_is_damped_when_stretching() {
        let mut gesture = dragging(Position::Top);
        let live = gesture.update(50.0).unwrap();
        assert!((live.offset_y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn drag_past_rest_is_clamped_without_stretching() {
        let mut gesture = GestureInterpreter::new(GestureConfig {
            stretching_enabled: false,
            ..config(Position::Bottom)
        });
        gesture.begin();
        assert_eq!(gesture.update(-50.0).unwrap().offset_y, 0.0);
        assert_eq!(gesture.update(40.0).unwrap().offset_y, 40.0);
    }

    #[test]
    fn fast_release_dismisses_with_small_displacement() {
        let mut gesture = dragging(Position::Top);
        let release = gesture.end(-1.0, -600.0);
        assert_eq!(release, Some(Release::Dismiss { velocity_y: -600.0 }));
        assert_eq!(gesture.phase(), GesturePhase::Released);
    }

    #[test]
    fn long_drag_dismisses_at_zero_velocity() {
        let mut gesture = dragging(Position::Bottom);
        let threshold = gesture.config().distance_threshold();
        assert_eq!(threshold, 64.0);
        assert!(matches!(
            gesture.end(threshold + 1.0, 0.0),
            Some(Release::Dismiss { .. })
        ));
    }

    #[test]
    fn short_slow_release_snaps_back() {
        let mut gesture = dragging(Position::Top);
        gesture.update(-20.0);
        assert_eq!(gesture.end(-20.0, -100.0), Some(Release::SnapBack));
        assert_eq!(gesture.phase(), GesturePhase::SnapBack);

        // A new drag can start after snapping back.
        assert!(gesture.begin());
    }

    #[test]
    fn velocity_away_from_exit_never_dismisses() {
        let mut gesture = dragging(Position::Top);
        assert_eq!(gesture.end(0.0, 3000.0), Some(Release::SnapBack));
    }

    #[test]
    fn released_gesture_ignores_new_drags() {
        let mut gesture = dragging(Position::Top);
        gesture.end(-200.0, 0.0);
        assert!(!gesture.begin());
    }
}
