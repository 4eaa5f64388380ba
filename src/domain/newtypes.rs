// SPDX-License-Identifier: MPL-2.0
//! Bulletin newtypes.
//!
//! This module provides type-safe wrappers for tunable presentation values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_PRESENTATION_SECS, DEFAULT_STRETCH_DAMPING, DEFAULT_TOUCH_SCALE,
    DEFAULT_VELOCITY_THRESHOLD, MAX_ANIMATION_SECS, MAX_VELOCITY_THRESHOLD, MIN_ANIMATION_SECS,
    MIN_TOUCH_SCALE, MIN_VELOCITY_THRESHOLD,
};
use std::time::Duration;

// =============================================================================
// StretchDamping
// =============================================================================

/// Fraction of a drag past the resting position that is actually applied.
///
/// `0.0` pins the bulletin at rest, `1.0` lets it follow the pointer freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StretchDamping(f32);

impl StretchDamping {
    /// Creates a new damping factor, clamping the value to `0.0..=1.0`.
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Applies the damping to a displacement past the resting position.
    #[must_use]
    pub fn apply(self, overshoot: f32) -> f32 {
        overshoot * self.0
    }
}

impl Default for StretchDamping {
    fn default() -> Self {
        Self(DEFAULT_STRETCH_DAMPING)
    }
}

// =============================================================================
// TouchScale
// =============================================================================

/// Scale applied to a bulletin while it is being touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchScale(f32);

impl TouchScale {
    /// Creates a new touch scale, clamping to `MIN_TOUCH_SCALE..=1.0`.
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(MIN_TOUCH_SCALE, 1.0))
    }

    /// Returns the raw scale.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Identity scale (touch feedback disabled).
    #[must_use]
    pub fn none() -> Self {
        Self(1.0)
    }
}

impl Default for TouchScale {
    fn default() -> Self {
        Self(DEFAULT_TOUCH_SCALE)
    }
}

// =============================================================================
// VelocityThreshold
// =============================================================================

/// Release velocity (px/s) toward the dismiss edge that triggers dismissal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityThreshold(f32);

impl VelocityThreshold {
    /// Creates a new threshold, clamping to the supported range.
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(MIN_VELOCITY_THRESHOLD, MAX_VELOCITY_THRESHOLD))
    }

    /// Returns the raw threshold in px/s.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the velocity reaches the threshold.
    #[must_use]
    pub fn is_reached_by(self, velocity: f32) -> bool {
        velocity >= self.0
    }
}

impl Default for VelocityThreshold {
    fn default() -> Self {
        Self(DEFAULT_VELOCITY_THRESHOLD)
    }
}

// =============================================================================
// AnimationSeconds
// =============================================================================

/// Animation duration in seconds, guaranteed to be within valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSeconds(f32);

impl AnimationSeconds {
    /// Creates a new duration, clamping to `MIN_ANIMATION_SECS..=MAX_ANIMATION_SECS`.
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(secs: f32) -> Self {
        if !secs.is_finite() {
            return Self::default();
        }
        Self(secs.clamp(MIN_ANIMATION_SECS, MAX_ANIMATION_SECS))
    }

    /// Returns the raw value in seconds.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f32(self.0)
    }
}

impl Default for AnimationSeconds {
    fn default() -> Self {
        Self(DEFAULT_PRESENTATION_SECS)
    }
}
