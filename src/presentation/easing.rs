// SPDX-License-Identifier: MPL-2.0
//! Timing curves mapping normalized time to animation progress.

/// Envelope decay reached at the end of a spring (`e^-6.9 ≈ 0.001`).
const SPRING_SETTLE: f32 = 6.907_755;

/// Lowest damping ratio accepted by [`Curve::Spring`].
const MIN_DAMPING: f32 = 0.05;

/// How progress evolves over an animation's duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Cubic ease-out.
    EaseOut,
    /// Damped spring that settles by the end of the duration.
    ///
    /// `velocity` is the initial velocity expressed in total travel
    /// distances per second (1.0 covers the whole distance in one second).
    Spring { damping: f32, velocity: f32 },
}

impl Curve {
    /// Progress at normalized time `t` (`0.0..=1.0`) of an animation lasting
    /// `duration_secs`. Springs may overshoot `1.0` before settling; the
    /// result is exactly `1.0` once `t >= 1.0`.
    #[must_use]
    pub fn progress(&self, t: f32, duration_secs: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            Curve::EaseOut => 1.0 - (1.0 - t).powi(3),
            Curve::Spring { damping, velocity } => {
                spring(t, damping.max(MIN_DAMPING), velocity * duration_secs)
            }
        }
    }
}

/// Damped harmonic oscillator moving from 0 toward 1 in normalized time.
fn spring(t: f32, damping: f32, initial_velocity: f32) -> f32 {
    if damping < 1.0 {
        let omega = SPRING_SETTLE / damping;
        let damped = omega * (1.0 - damping * damping).sqrt();
        let envelope = (-damping * omega * t).exp();
        let b = (damping * omega - initial_velocity) / damped;
        1.0 - envelope * ((damped * t).cos() + b * (damped * t).sin())
    } else {
        let omega = SPRING_SETTLE;
        let envelope = (-omega * t).exp();
        1.0 - envelope * (1.0 + (omega - initial_velocity) * t)
    }
}
