// SPDX-License-Identifier: MPL-2.0
//! Bulletins offered by the demo, one per style preset.

use crate::bulletin::{Bulletin, BulletinDuration, Priority};
use crate::config::Config;
use crate::ui::design_tokens::palette;
use crate::ui::overlay::CardContent;
use iced::Color;

/// Content of a demo bulletin.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoContent {
    pub title: String,
    pub body: String,
    pub accent: Option<Color>,
}

impl DemoContent {
    fn new(title: &str, body: &str, accent: Option<Color>) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            accent,
        }
    }
}

impl CardContent for DemoContent {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn accent(&self) -> Option<Color> {
        self.accent
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Notification,
    Banner,
    StickyBanner,
    StatusBar,
    Alert,
    Hud,
    Sheet,
    Tappable,
    Urgent,
}

impl Preset {
    pub const ALL: [Preset; 9] = [
        Preset::Notification,
        Preset::Banner,
        Preset::StickyBanner,
        Preset::StatusBar,
        Preset::Alert,
        Preset::Hud,
        Preset::Sheet,
        Preset::Tappable,
        Preset::Urgent,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Preset::Notification => "Notification",
            Preset::Banner => "Banner",
            Preset::StickyBanner => "Sticky banner",
            Preset::StatusBar => "Status bar",
            Preset::Alert => "Alert",
            Preset::Hud => "HUD",
            Preset::Sheet => "Sheet",
            Preset::Tappable => "Tappable",
            Preset::Urgent => "Required",
        }
    }

    /// Builds the bulletin, honoring the configured animation and duration.
    #[must_use]
    pub fn build(self, config: &Config) -> Bulletin<DemoContent> {
        let limited = config.display_duration();
        match self {
            Preset::Notification => Bulletin::notification(DemoContent::new(
                "New message",
                "Swipe up to dismiss.",
                Some(palette::INFO_500),
            ))
            .with_duration(limited)
            .with_presentation(config.animation_settings()),
            Preset::Banner => Bulletin::banner(
                DemoContent::new(
                    "Saved",
                    "Your changes were written to disk.",
                    Some(palette::SUCCESS_500),
                ),
                false,
            )
            .with_duration(limited)
            .with_height(64.0),
            Preset::StickyBanner => Bulletin::banner(
                DemoContent::new("Offline", "Stays until dismissed.", Some(palette::WARNING_500)),
                true,
            )
            .with_height(64.0),
            Preset::StatusBar => Bulletin::status_bar(DemoContent::new("Syncing…", "", None))
                .with_duration(limited)
                .with_height(20.0),
            Preset::Alert => Bulletin::alert(DemoContent::new(
                "Delete photo?",
                "Click outside to cancel.",
                Some(palette::ERROR_500),
            ))
            .with_height(120.0)
            .with_presentation(config.animation_settings()),
            Preset::Hud => {
                Bulletin::hud(DemoContent::new("Loading", "Dismiss from the panel.", None))
                    .with_height(120.0)
                    .with_presentation(config.animation_settings())
            }
            Preset::Sheet => Bulletin::sheet(DemoContent::new(
                "Share",
                "Drag down or click the backdrop to close.",
                None,
            ))
            .with_height(180.0)
            .with_presentation(config.animation_settings()),
            Preset::Tappable => Bulletin::new(DemoContent::new(
                "Update available",
                "Click to install.",
                Some(palette::PRIMARY_500),
            ))
            .with_action()
            .with_identifier("update")
            .with_metadata("version", "0.3.0")
            .with_duration(BulletinDuration::Forever)
            .with_presentation(config.animation_settings()),
            Preset::Urgent => Bulletin::notification(DemoContent::new(
                "Battery critical",
                "Required bulletins preempt everything.",
                Some(palette::ERROR_500),
            ))
            .with_priority(Priority::Required)
            .with_duration(limited)
            .with_presentation(config.animation_settings()),
        }
    }
}
