// SPDX-License-Identifier: MPL-2.0
//! Core bulletin data structures.
//!
//! This module defines the `Bulletin` request submitted to the lifecycle
//! controller together with the enums and settings that describe how it is
//! queued, placed, animated and styled.

use crate::config::{
    DEFAULT_BULLETIN_HEIGHT, DEFAULT_DISPLAY_SECS, DEFAULT_PRESENTATION_SECS,
    DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_VELOCITY,
};
use iced::Padding;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Unique identifier for a bulletin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BulletinId(u64);

impl BulletinId {
    /// Creates a new unique bulletin ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for BulletinId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BulletinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Queue priority. Ordering is significant: `Low < High < Required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    /// Waits behind anything more important.
    #[default]
    Low,
    /// Preempts a lone lower-priority bulletin.
    High,
    /// Always preempts whatever is displayed.
    Required,
}

impl Priority {
    /// Single-letter tag used in queue descriptions.
    #[must_use]
    pub fn tag(self) -> char {
        match self {
            Priority::Low => 'L',
            Priority::High => 'H',
            Priority::Required => 'R',
        }
    }
}

/// How long a bulletin stays on screen once presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletinDuration {
    /// Stays until dismissed explicitly or interactively.
    Forever,
    /// Dismissed automatically after the given duration.
    Limit(Duration),
}

impl BulletinDuration {
    /// Returns the auto-dismiss interval, or `None` for `Forever`.
    ///
    /// A zero limit is treated as `Forever`.
    #[must_use]
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        match self {
            BulletinDuration::Forever => None,
            BulletinDuration::Limit(d) if d.is_zero() => None,
            BulletinDuration::Limit(d) => Some(*d),
        }
    }
}

impl Default for BulletinDuration {
    fn default() -> Self {
        BulletinDuration::Limit(Duration::from_secs(DEFAULT_DISPLAY_SECS))
    }
}

/// Resting place of a bulletin on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Ordinal placement of the overlay surface relative to system chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum WindowLevel {
    #[default]
    Default,
    StatusBar,
    Alert,
    Keyboard,
}

/// Effect drawn behind the bulletin, covering the whole surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BackgroundEffect {
    #[default]
    None,
    /// Black tint with the given alpha.
    Darken(f32),
    /// Frosted tint.
    Blur,
}

/// Enter animation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    pub duration: Duration,
    pub spring_damping: f32,
    pub spring_velocity: f32,
}

impl AnimationSettings {
    /// A spring is used only when both damping and velocity are positive.
    #[must_use]
    pub fn uses_spring(&self) -> bool {
        self.spring_damping > 0.0 && self.spring_velocity > 0.0
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs_f32(DEFAULT_PRESENTATION_SECS),
            spring_damping: DEFAULT_SPRING_DAMPING,
            spring_velocity: DEFAULT_SPRING_VELOCITY,
        }
    }
}

/// Visual and interaction style of a bulletin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSettings {
    pub background: BackgroundEffect,
    /// Spacing between the bulletin and the surface edges.
    pub edge_insets: Padding,
    pub corner_radius: f32,
    pub stretching_enabled: bool,
    pub animated_touch_enabled: bool,
    pub background_dismiss_enabled: bool,
    pub shadow_radius: f32,
    pub shadow_offset_y: f32,
}

impl StyleSettings {
    /// Extra travel so the shadow leaves the surface along with the card.
    #[must_use]
    pub fn shadow_allowance(&self) -> f32 {
        self.shadow_radius + self.shadow_offset_y
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            background: BackgroundEffect::None,
            edge_insets: Padding {
                top: 24.0,
                right: 8.0,
                bottom: 24.0,
                left: 8.0,
            },
            corner_radius: 4.0,
            stretching_enabled: true,
            animated_touch_enabled: true,
            background_dismiss_enabled: true,
            shadow_radius: 3.0,
            shadow_offset_y: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// A single haptic cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackStyle {
    #[default]
    None,
    Notification(NotificationKind),
    Impact(ImpactStyle),
    SelectionChanged,
}

/// Haptic cues played at the interesting moments of a bulletin's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackSettings {
    pub presentation: FeedbackStyle,
    pub action: FeedbackStyle,
    pub snapping: FeedbackStyle,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            presentation: FeedbackStyle::Notification(NotificationKind::Success),
            action: FeedbackStyle::Impact(ImpactStyle::Light),
            snapping: FeedbackStyle::Impact(ImpactStyle::Light),
        }
    }
}

/// A bulletin to be displayed above the host's views.
///
/// `T` is the caller's content; the lifecycle never inspects it and hands it
/// back in [`crate::lifecycle::BulletinEvent::Action`] once a tapped
/// bulletin has left the screen.
#[derive(Debug, Clone)]
pub struct Bulletin<T> {
    id: BulletinId,
    content: T,
    pub priority: Priority,
    pub duration: BulletinDuration,
    pub position: Position,
    pub level: WindowLevel,
    pub identifier: Option<String>,
    pub metadata: BTreeMap<String, String>,
    /// Measured height of the rendered content.
    pub height: f32,
    pub action: bool,
    pub sound: Option<PathBuf>,
    pub presentation: AnimationSettings,
    pub style: StyleSettings,
    pub feedback: FeedbackSettings,
}

impl<T> Bulletin<T> {
    /// Creates a new bulletin with default settings (top, low priority, 5s).
    pub fn new(content: T) -> Self {
        Self {
            id: BulletinId::new(),
            content,
            priority: Priority::default(),
            duration: BulletinDuration::default(),
            position: Position::default(),
            level: WindowLevel::default(),
            identifier: None,
            metadata: BTreeMap::new(),
            height: DEFAULT_BULLETIN_HEIGHT,
            action: false,
            sound: None,
            presentation: AnimationSettings::default(),
            style: StyleSettings::default(),
            feedback: FeedbackSettings::default(),
        }
    }

    /// A notification styled bulletin, shown over the status bar.
    pub fn notification(content: T) -> Self {
        let mut bulletin = Self::new(content);
        bulletin.level = WindowLevel::StatusBar;
        bulletin
    }

    /// A full-width banner. Sticky banners are never dismissed automatically.
    pub fn banner(content: T, sticky: bool) -> Self {
        let mut bulletin = Self::new(content);
        bulletin.position = Position::Top;
        bulletin.duration = if sticky {
            BulletinDuration::Forever
        } else {
            BulletinDuration::default()
        };
        bulletin.presentation = AnimationSettings {
            duration: Duration::from_millis(200),
            spring_damping: 0.0,
            spring_velocity: 0.0,
        };
        bulletin.style.edge_insets = Padding::ZERO;
        bulletin.style.corner_radius = 0.0;
        bulletin.style.stretching_enabled = false;
        bulletin.style.animated_touch_enabled = false;
        bulletin
    }

    /// A toast laid over the status bar.
    pub fn status_bar(content: T) -> Self {
        let mut bulletin = Self::banner(content, false);
        bulletin.level = WindowLevel::StatusBar;
        bulletin.style.shadow_radius = 0.0;
        bulletin.style.shadow_offset_y = 0.0;
        bulletin
    }

    /// A centered alert over a darkened background.
    pub fn alert(content: T) -> Self {
        let mut bulletin = Self::new(content);
        bulletin.position = Position::Center;
        bulletin.level = WindowLevel::Alert;
        bulletin.duration = BulletinDuration::Forever;
        bulletin.style.background = BackgroundEffect::Darken(0.5);
        bulletin.style.edge_insets = Padding {
            top: 0.0,
            right: 50.0,
            bottom: 0.0,
            left: 50.0,
        };
        bulletin.style.corner_radius = 14.0;
        bulletin
    }

    /// A centered HUD that only the host can dismiss.
    pub fn hud(content: T) -> Self {
        let mut bulletin = Self::alert(content);
        bulletin.style.background_dismiss_enabled = false;
        bulletin
    }

    /// A bottom sheet over a darkened background.
    pub fn sheet(content: T) -> Self {
        let mut bulletin = Self::new(content);
        bulletin.position = Position::Bottom;
        bulletin.duration = BulletinDuration::Forever;
        bulletin.style.background = BackgroundEffect::Darken(0.5);
        bulletin.style.stretching_enabled = false;
        bulletin.style.animated_touch_enabled = false;
        bulletin.style.edge_insets = Padding {
            top: 8.0,
            right: 8.0,
            bottom: 8.0,
            left: 8.0,
        };
        bulletin
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: BulletinDuration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: WindowLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_presentation(mut self, presentation: AnimationSettings) -> Self {
        self.presentation = presentation;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Adds a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Makes the bulletin tappable: a tap dismisses it and then reports an
    /// action event carrying the content.
    #[must_use]
    pub fn with_action(mut self) -> Self {
        self.action = true;
        self
    }

    /// Plays the given sound file when the bulletin is presented.
    #[must_use]
    pub fn with_sound(mut self, path: impl Into<PathBuf>) -> Self {
        self.sound = Some(path.into());
        self
    }

    /// Returns the bulletin's unique ID.
    #[must_use]
    pub fn id(&self) -> BulletinId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Consumes the bulletin, returning its content.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Inset between the resting edge and the bulletin for its position.
    #[must_use]
    pub fn resting_inset(&self) -> f32 {
        match self.position {
            Position::Top => self.style.edge_insets.top,
            Position::Bottom => self.style.edge_insets.bottom,
            Position::Center => 0.0,
        }
    }
}
