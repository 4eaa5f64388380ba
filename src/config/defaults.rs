// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Presentation**: Enter animation timing and spring parameters
//! - **Dismissal**: Exit animation timing
//! - **Snap back**: Return-to-rest animation after an aborted drag
//! - **Gesture**: Drag thresholds and elastic damping
//! - **Timing**: Default on-screen duration

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Default enter animation duration (in seconds).
pub const DEFAULT_PRESENTATION_SECS: f32 = 0.4;

/// Default spring damping ratio for the enter animation.
pub const DEFAULT_SPRING_DAMPING: f32 = 0.7;

/// Default initial spring velocity for the enter animation.
pub const DEFAULT_SPRING_VELOCITY: f32 = 0.4;

/// Scale a center bulletin starts from (and shrinks back to on exit).
pub const CENTER_START_SCALE: f32 = 0.85;

// ==========================================================================
// Dismissal Defaults
// ==========================================================================

/// Default exit animation duration for top/bottom bulletins (in seconds).
pub const DEFAULT_DISMISSAL_SECS: f32 = 0.4;

/// Spring damping used by the top/bottom exit animation.
pub const DEFAULT_DISMISSAL_DAMPING: f32 = 0.8;

/// Exit animation duration for center bulletins (in seconds).
pub const DEFAULT_CENTER_DISMISSAL_SECS: f32 = 0.25;

/// Minimum allowed animation duration (in seconds).
pub const MIN_ANIMATION_SECS: f32 = 0.05;

/// Maximum allowed animation duration (in seconds).
pub const MAX_ANIMATION_SECS: f32 = 5.0;

// ==========================================================================
// Snap Back Defaults
// ==========================================================================

/// Snap back duration when the bulletin was presented with a spring.
pub const SNAP_BACK_SPRING_SECS: f32 = 0.3;

/// Snap back spring damping.
pub const SNAP_BACK_SPRING_DAMPING: f32 = 0.7;

/// Snap back initial spring velocity.
pub const SNAP_BACK_SPRING_VELOCITY: f32 = 0.4;

/// Snap back duration when the bulletin was presented without a spring.
pub const SNAP_BACK_EASE_SECS: f32 = 0.25;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Release velocity (px/s toward the dismiss edge) that always dismisses.
pub const DEFAULT_VELOCITY_THRESHOLD: f32 = 500.0;

/// Minimum allowed velocity threshold.
pub const MIN_VELOCITY_THRESHOLD: f32 = 50.0;

/// Maximum allowed velocity threshold.
pub const MAX_VELOCITY_THRESHOLD: f32 = 5000.0;

/// Fraction of a drag past the resting position that is applied.
pub const DEFAULT_STRETCH_DAMPING: f32 = 0.2;

/// Scale applied while a bulletin is touched or dragged.
pub const DEFAULT_TOUCH_SCALE: f32 = 0.98;

/// Minimum allowed touch scale.
pub const MIN_TOUCH_SCALE: f32 = 0.5;

/// Distance (px) a pointer may travel and still count as a tap.
pub const TAP_SLOP: f32 = 4.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default on-screen duration for bulletins with a limited duration.
pub const DEFAULT_DISPLAY_SECS: u64 = 5;

/// Default measured height of bulletin content (px).
pub const DEFAULT_BULLETIN_HEIGHT: f32 = 80.0;
