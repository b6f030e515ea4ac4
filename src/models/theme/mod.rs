// Theme palettes
// Closed set of built-in themes, each mapped to an explicit palette.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Colors used by every screen of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub is_dark: bool,
    pub background: Color,
    pub text: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub card_background: Color,
    pub card_shadow: Color,
    pub header_background: Color,
    pub divider: Color,
    pub button_background: Color,
    pub button_text: Color,
    pub input_background: Color,
    pub input_border: Color,
    pub input_text: Color,
}

impl ThemeMode {
    pub fn all() -> &'static [ThemeMode] {
        &[ThemeMode::Light, ThemeMode::Dark]
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Resolve a stored theme name; anything unrecognised falls back to light.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown theme {:?}, falling back to light", name);
            ThemeMode::Light
        })
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            ThemeMode::Light => ThemePalette::light(),
            ThemeMode::Dark => ThemePalette::dark(),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ThemePalette {
    pub const fn light() -> Self {
        Self {
            is_dark: false,
            background: Color::new(0xFF, 0xFF, 0xFF),
            text: Color::new(0x33, 0x33, 0x33),
            primary: Color::new(0x68, 0x45, 0xA3),
            secondary: Color::new(0xF8, 0xF9, 0xFA),
            accent: Color::new(0xFF, 0x6B, 0x6B),
            card_background: Color::new(0xFF, 0xFF, 0xFF),
            card_shadow: Color::new(0xDD, 0xDD, 0xDD),
            header_background: Color::new(0x68, 0x45, 0xA3),
            divider: Color::new(0xEE, 0xEE, 0xEE),
            button_background: Color::new(0x68, 0x45, 0xA3),
            button_text: Color::new(0xFF, 0xFF, 0xFF),
            input_background: Color::new(0xF5, 0xF5, 0xF5),
            input_border: Color::new(0xE0, 0xE0, 0xE0),
            input_text: Color::new(0x33, 0x33, 0x33),
        }
    }

    pub const fn dark() -> Self {
        Self {
            is_dark: true,
            background: Color::new(0x12, 0x12, 0x12),
            text: Color::new(0xFF, 0xFF, 0xFF),
            primary: Color::new(0x93, 0x70, 0xDB),
            secondary: Color::new(0x2D, 0x22, 0x52),
            accent: Color::new(0xFF, 0x6B, 0x6B),
            card_background: Color::new(0x1E, 0x1E, 0x1E),
            card_shadow: Color::new(0x00, 0x00, 0x00),
            header_background: Color::new(0x2D, 0x22, 0x52),
            divider: Color::new(0x33, 0x33, 0x33),
            button_background: Color::new(0x93, 0x70, 0xDB),
            button_text: Color::new(0xFF, 0xFF, 0xFF),
            input_background: Color::new(0x2A, 0x2A, 0x2A),
            input_border: Color::new(0x44, 0x44, 0x44),
            input_text: Color::new(0xFF, 0xFF, 0xFF),
        }
    }
}
