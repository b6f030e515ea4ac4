// Settings module
// User preferences plus the locations of the static color tables

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub language: Language,
    pub theme: ThemeMode,
    pub notifications_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: Language::En,
            theme: ThemeMode::Light,
            notifications_enabled: true,
        }
    }
}

/// Where the JSON tables live. Relative paths resolve against the working
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub day_colors: PathBuf,
    pub looks: PathBuf,
    /// Replaces the built-in named color catalog when set
    pub catalog: Option<PathBuf>,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            day_colors: PathBuf::from("data/color.json"),
            looks: PathBuf::from("data/matchColors.json"),
            catalog: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub preferences: Preferences,
    pub data: DataPaths,
}
