// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use super::preset::Preset;
use crate::lifecycle::ModalKind;
use crate::ui::overlay::OverlayMessage;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Submit a bulletin built from a preset.
    Show(Preset),
    /// Submit a bulletin after a short delay.
    ShowDelayed(Preset),
    /// Submit several low-priority bulletins at once.
    Burst,
    /// Dismiss the bulletin on screen and advance the queue.
    DismissCurrent,
    /// Dismiss the bulletin on screen and hold the queue.
    DismissAndHold,
    /// Present the next queued bulletin after a hold.
    Resume,
    /// Ask where a host modal would be presented.
    RequestModal(ModalKind),
    Overlay(OverlayMessage),
    ToggleTheme,
    ClearLog,
    /// Periodic tick driving animations and timers while bulletins are active.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the config directory (`--config-dir`).
    pub config_dir: Option<String>,
    /// Overrides the configured theme (`--theme`).
    pub theme: Option<ThemeMode>,
}
