// SPDX-License-Identifier: MPL-2.0
//! Durations and spring parameters shared by every bulletin's animator.

use crate::config::{
    DEFAULT_CENTER_DISMISSAL_SECS, DEFAULT_DISMISSAL_DAMPING, DEFAULT_DISMISSAL_SECS,
    SNAP_BACK_EASE_SECS, SNAP_BACK_SPRING_DAMPING, SNAP_BACK_SPRING_SECS,
    SNAP_BACK_SPRING_VELOCITY,
};
use std::time::Duration;

/// Exit and snap-back timings. Enter timings live on each bulletin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorTiming {
    pub dismissal: Duration,
    pub dismissal_damping: f32,
    pub center_dismissal: Duration,
    pub snap_spring: Duration,
    pub snap_damping: f32,
    pub snap_velocity: f32,
    pub snap_ease: Duration,
}

impl Default for AnimatorTiming {
    fn default() -> Self {
        Self {
            dismissal: Duration::from_secs_f32(DEFAULT_DISMISSAL_SECS),
            dismissal_damping: DEFAULT_DISMISSAL_DAMPING,
            center_dismissal: Duration::from_secs_f32(DEFAULT_CENTER_DISMISSAL_SECS),
            snap_spring: Duration::from_secs_f32(SNAP_BACK_SPRING_SECS),
            snap_damping: SNAP_BACK_SPRING_DAMPING,
            snap_velocity: SNAP_BACK_SPRING_VELOCITY,
            snap_ease: Duration::from_secs_f32(SNAP_BACK_EASE_SECS),
        }
    }
}
