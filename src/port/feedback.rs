// SPDX-License-Identifier: MPL-2.0
//! Haptic and audio feedback port.
//!
//! Playback failures are reported to the caller but never interrupt a
//! presentation; the controller logs them and moves on.

use crate::bulletin::FeedbackStyle;
use crate::error::{FeedbackError, Result};
use std::path::Path;

/// Plays haptic cues and sound effects.
pub trait Feedback {
    /// Plays a haptic cue. `FeedbackStyle::None` is never passed in.
    fn play(&mut self, style: FeedbackStyle) -> Result<()>;

    /// Plays a sound effect file.
    fn play_sound(&mut self, path: &Path) -> Result<()>;
}

/// Feedback adapter that only logs the cues it is asked to play.
///
/// Sound files are checked for existence so that misconfigured paths show up
/// as warnings, which is the closest a desktop demo gets to playing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedback;

impl Feedback for LogFeedback {
    fn play(&mut self, style: FeedbackStyle) -> Result<()> {
        tracing::info!(?style, "feedback cue");
        Ok(())
    }

    fn play_sound(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(FeedbackError::SoundUnavailable(path.display().to_string()).into());
        }
        tracing::info!(path = %path.display(), "sound effect");
        Ok(())
    }
}

/// Feedback adapter that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentFeedback;

impl Feedback for SilentFeedback {
    fn play(&mut self, _style: FeedbackStyle) -> Result<()> {
        Ok(())
    }

    fn play_sound(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }
}
