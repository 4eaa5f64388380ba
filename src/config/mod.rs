// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo's configuration, loading and saving the
//! bulletin tunables to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[animation]` - Enter animation of new bulletins
//! - `[dismissal]` - Exit and snap-back animations
//! - `[gesture]` - Drag thresholds and touch feedback
//! - `[timing]` - How long bulletins stay on screen
//!
//! Every field is optional; missing or out-of-range values fall back to (or
//! are clamped around) the constants in [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_BULLETIN_CONFIG_DIR`
//! 3. Falls back to the platform config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_bulletin::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.gesture.velocity_threshold = Some(800.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::bulletin::{AnimationSettings, BulletinDuration};
use crate::domain::{AnimationSeconds, StretchDamping, TouchScale, VelocityThreshold};
use crate::error::{Error, Result};
use crate::lifecycle::ControllerSettings;
use crate::presentation::AnimatorTiming;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when the config file exists but cannot be read.
pub const LOAD_ERROR_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Enter animation of newly created bulletins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    #[serde(default = "default_presentation_secs", skip_serializing_if = "Option::is_none")]
    pub presentation_secs: Option<f32>,

    /// Spring damping ratio; `0` switches to an ease-out curve.
    #[serde(default = "default_spring_damping", skip_serializing_if = "Option::is_none")]
    pub spring_damping: Option<f32>,

    #[serde(default = "default_spring_velocity", skip_serializing_if = "Option::is_none")]
    pub spring_velocity: Option<f32>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            presentation_secs: default_presentation_secs(),
            spring_damping: default_spring_damping(),
            spring_velocity: default_spring_velocity(),
        }
    }
}

/// Exit and snap-back animations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DismissalConfig {
    #[serde(default = "default_dismissal_secs", skip_serializing_if = "Option::is_none")]
    pub dismissal_secs: Option<f32>,

    #[serde(default = "default_dismissal_damping", skip_serializing_if = "Option::is_none")]
    pub dismissal_damping: Option<f32>,

    #[serde(
        default = "default_center_dismissal_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub center_dismissal_secs: Option<f32>,

    #[serde(default = "default_snap_back_secs", skip_serializing_if = "Option::is_none")]
    pub snap_back_secs: Option<f32>,
}

impl Default for DismissalConfig {
    fn default() -> Self {
        Self {
            dismissal_secs: default_dismissal_secs(),
            dismissal_damping: default_dismissal_damping(),
            center_dismissal_secs: default_center_dismissal_secs(),
            snap_back_secs: default_snap_back_secs(),
        }
    }
}

/// Drag thresholds and touch feedback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureSection {
    /// Release velocity (px/s) toward the exit edge that dismisses.
    #[serde(
        default = "default_velocity_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub velocity_threshold: Option<f32>,

    /// Fraction of a drag past the resting position that is applied.
    #[serde(default = "default_stretch_damping", skip_serializing_if = "Option::is_none")]
    pub stretch_damping: Option<f32>,

    /// Scale of a touched bulletin.
    #[serde(default = "default_touch_scale", skip_serializing_if = "Option::is_none")]
    pub touch_scale: Option<f32>,
}

impl Default for GestureSection {
    fn default() -> Self {
        Self {
            velocity_threshold: default_velocity_threshold(),
            stretch_damping: default_stretch_damping(),
            touch_scale: default_touch_scale(),
        }
    }
}

/// On-screen durations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Seconds a bulletin stays on screen; `0` keeps it until dismissed.
    #[serde(default = "default_display_secs", skip_serializing_if = "Option::is_none")]
    pub display_secs: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            display_secs: default_display_secs(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Demo configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub dismissal: DismissalConfig,

    #[serde(default)]
    pub gesture: GestureSection,

    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Tunables for the lifecycle controller.
    #[must_use]
    pub fn controller_settings(&self) -> ControllerSettings {
        let dismissal = &self.dismissal;
        let snap_back = dismissal
            .snap_back_secs
            .map_or(Duration::from_secs_f32(SNAP_BACK_SPRING_SECS), |secs| {
                AnimationSeconds::new(secs).as_duration()
            });

        ControllerSettings {
            timing: AnimatorTiming {
                dismissal: seconds_or(dismissal.dismissal_secs, DEFAULT_DISMISSAL_SECS),
                dismissal_damping: non_negative_or(
                    dismissal.dismissal_damping,
                    DEFAULT_DISMISSAL_DAMPING,
                ),
                center_dismissal: seconds_or(
                    dismissal.center_dismissal_secs,
                    DEFAULT_CENTER_DISMISSAL_SECS,
                ),
                snap_spring: snap_back,
                ..AnimatorTiming::default()
            },
            stretch_damping: self
                .gesture
                .stretch_damping
                .map_or_else(StretchDamping::default, StretchDamping::new),
            touch_scale: self
                .gesture
                .touch_scale
                .map_or_else(TouchScale::default, TouchScale::new),
            velocity_threshold: self
                .gesture
                .velocity_threshold
                .map_or_else(VelocityThreshold::default, VelocityThreshold::new),
        }
    }

    /// Enter animation applied to bulletins created by the demo.
    #[must_use]
    pub fn animation_settings(&self) -> AnimationSettings {
        AnimationSettings {
            duration: seconds_or(self.animation.presentation_secs, DEFAULT_PRESENTATION_SECS),
            spring_damping: non_negative_or(self.animation.spring_damping, DEFAULT_SPRING_DAMPING),
            spring_velocity: non_negative_or(
                self.animation.spring_velocity,
                DEFAULT_SPRING_VELOCITY,
            ),
        }
    }

    /// On-screen duration of limited bulletins.
    #[must_use]
    pub fn display_duration(&self) -> BulletinDuration {
        match self.timing.display_secs.unwrap_or(DEFAULT_DISPLAY_SECS) {
            0 => BulletinDuration::Forever,
            secs => BulletinDuration::Limit(Duration::from_secs(secs)),
        }
    }
}

fn seconds_or(value: Option<f32>, default: f32) -> Duration {
    AnimationSeconds::new(value.unwrap_or(default)).as_duration()
}

/// Finite, non-negative value or the default.
fn non_negative_or(value: Option<f32>, default: f32) -> f32 {
    value.filter(|v| v.is_finite()).unwrap_or(default).max(0.0)
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_presentation_secs() -> Option<f32> {
    Some(DEFAULT_PRESENTATION_SECS)
}

fn default_spring_damping() -> Option<f32> {
    Some(DEFAULT_SPRING_DAMPING)
}

fn default_spring_velocity() -> Option<f32> {
    Some(DEFAULT_SPRING_VELOCITY)
}

fn default_dismissal_secs() -> Option<f32> {
    Some(DEFAULT_DISMISSAL_SECS)
}

fn default_dismissal_damping() -> Option<f32> {
    Some(DEFAULT_DISMISSAL_DAMPING)
}

fn default_center_dismissal_secs() -> Option<f32> {
    Some(DEFAULT_CENTER_DISMISSAL_SECS)
}

fn default_snap_back_secs() -> Option<f32> {
    Some(SNAP_BACK_SPRING_SECS)
}

fn default_velocity_threshold() -> Option<f32> {
    Some(DEFAULT_VELOCITY_THRESHOLD)
}

fn default_stretch_damping() -> Option<f32> {
    Some(DEFAULT_STRETCH_DAMPING)
}

fn default_touch_scale() -> Option<f32> {
    Some(DEFAULT_TOUCH_SCALE)
}

fn default_display_secs() -> Option<u64> {
    Some(DEFAULT_DISPLAY_SECS)
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with [`LOAD_ERROR_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load config");
            (Config::default(), Some(LOAD_ERROR_WARNING.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_default_settings() {
        let config = Config::default();
        assert_eq!(config.controller_settings(), ControllerSettings::default());
        assert_eq!(config.animation_settings(), AnimationSettings::default());
        assert_eq!(config.display_duration(), BulletinDuration::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.gesture.touch_scale = Some(2.0);
        config.gesture.velocity_threshold = Some(1.0);
        config.dismissal.dismissal_secs = Some(60.0);

        let settings = config.controller_settings();
        assert_eq!(settings.touch_scale.value(), 1.0);
        assert_eq!(settings.velocity_threshold.value(), MIN_VELOCITY_THRESHOLD);
        assert_eq!(
            settings.timing.dismissal,
            Duration::from_secs_f32(MAX_ANIMATION_SECS)
        );
    }

    #[test]
    fn non_finite_values_load_as_defaults() {
        let config: Config = toml::from_str(
            "[animation]\npresentation_secs = nan\nspring_damping = inf\n\
             [gesture]\nvelocity_threshold = nan\n",
        )
        .expect("non-finite floats parse");

        assert_eq!(config.animation_settings(), AnimationSettings::default());
        assert_eq!(
            config.controller_settings().velocity_threshold,
            VelocityThreshold::default()
        );
    }

    #[test]
    fn zero_display_secs_means_forever() {
        let mut config = Config::default();
        config.timing.display_secs = Some(0);
        assert_eq!(config.display_duration(), BulletinDuration::Forever);
    }

    #[test]
    fn zero_damping_switches_enter_to_ease_out() {
        let mut config = Config::default();
        config.animation.spring_damping = Some(0.0);
        assert!(!config.animation_settings().uses_spring());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[gesture]\nvelocity_threshold = 900.0\n")
            .expect("partial config parses");
        assert_eq!(config.gesture.velocity_threshold, Some(900.0));
        assert_eq!(config.gesture.touch_scale, Some(DEFAULT_TOUCH_SCALE));
        assert_eq!(config.timing, TimingConfig::default());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn corrupt_file_yields_default_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
    }

    #[test]
    fn missing_file_is_not_a_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("nope")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
