// SPDX-License-Identifier: MPL-2.0
use iced_bulletin::bulletin::{Bulletin, BulletinDuration};
use iced_bulletin::config::{self, Config, LOAD_ERROR_WARNING};
use iced_bulletin::lifecycle::{LifecycleController, LifecycleState};
use iced_bulletin::port::{FixedInsets, LayeredSurface, SilentFeedback};
use iced_bulletin::ui::theming::ThemeMode;
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn saved_config_is_loaded_back_from_the_same_directory() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.gesture.velocity_threshold = Some(900.0);
    config.timing.display_secs = Some(0);
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    assert!(dir.path().join("settings.toml").is_file());

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);
    assert_eq!(loaded.display_duration(), BulletinDuration::Forever);
}

#[test]
fn missing_file_yields_defaults_silently() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (loaded, warning) = config::load_with_override(Some(dir.path().join("nowhere")));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}

#[test]
fn corrupt_file_yields_defaults_with_a_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[gesture\nvelocity_threshold = ")
        .expect("Failed to write corrupt file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
}

#[test]
fn partial_file_keeps_defaults_for_missing_sections() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[general]\ntheme_mode = \"light\"\n").expect("Failed to write file");

    let loaded = config::load_from_path(&path).expect("Failed to load partial config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.gesture, Config::default().gesture);
    assert_eq!(loaded.controller_settings(), Config::default().controller_settings());
}

#[test]
fn configured_velocity_threshold_changes_flick_outcome() {
    let mut config = Config::default();
    config.gesture.velocity_threshold = Some(1000.0);

    let mut controller = LifecycleController::new(
        config.controller_settings(),
        LayeredSurface::new(),
        FixedInsets::none(),
        SilentFeedback,
    );
    let start = Instant::now();
    controller.enqueue(Bulletin::new("flick"), start);
    controller.tick(start + Duration::from_millis(600));

    // 600 px/s would dismiss with the default threshold.
    controller.pan_began(start + Duration::from_millis(700));
    controller.pan_ended(-1.0, -600.0, start + Duration::from_millis(750));
    assert_eq!(controller.state(), LifecycleState::Displayed);

    controller.pan_began(start + Duration::from_millis(1200));
    controller.pan_ended(-1.0, -1200.0, start + Duration::from_millis(1250));
    assert_eq!(controller.state(), LifecycleState::Dismissing);
}

#[test]
fn huge_display_duration_never_dismisses() {
    let config: Config = toml::from_str("[timing]\ndisplay_secs = 9223372036854775807\n")
        .expect("Failed to parse config");

    let mut controller = LifecycleController::new(
        config.controller_settings(),
        LayeredSurface::new(),
        FixedInsets::none(),
        SilentFeedback,
    );
    let start = Instant::now();
    controller.enqueue(
        Bulletin::new("long").with_duration(config.display_duration()),
        start,
    );
    controller.tick(start + Duration::from_millis(600));
    assert_eq!(controller.state(), LifecycleState::Displayed);
    assert_eq!(controller.dismiss_deadline(), None);
}
