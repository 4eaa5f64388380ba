// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming of the demo and of bulletin cards.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Colors used to paint bulletins and the demo chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface: Color,
    pub surface_muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub card: Color,
    pub card_text: Color,
    pub card_text_secondary: Color,
    pub brand: Color,
    pub status_bar: Color,
    pub blur_tint: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            surface_muted: palette::GRAY_100,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            card: palette::WHITE,
            card_text: palette::GRAY_900,
            card_text_secondary: palette::GRAY_700,
            brand: palette::PRIMARY_500,
            status_bar: palette::GRAY_200,
            blur_tint: Color {
                a: opacity::FROST,
                ..palette::WHITE
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            surface_muted: Color::from_rgb(0.15, 0.15, 0.15),
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            card: Color::from_rgb(0.2, 0.2, 0.22),
            card_text: palette::WHITE,
            card_text_secondary: palette::GRAY_200,
            brand: palette::PRIMARY_400,
            status_bar: palette::GRAY_700,
            blur_tint: Color {
                a: opacity::FROST,
                ..palette::GRAY_400
            },
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Parses a `--theme` argument.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }

    /// The iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
