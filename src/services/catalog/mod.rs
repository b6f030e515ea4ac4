// Named color catalog
// Resolves color identifiers used by the day tables ("Light Blue") to swatch colors.

use std::collections::BTreeMap;
use std::path::Path;

use crate::models::color::Color;
use crate::models::day_colors::{read_table, TableError};

/// Named colors shipped with the app.
const DEFAULT_COLORS: [(&str, Color); 14] = [
    ("Red", Color::new(0xFF, 0x00, 0x00)),
    ("Orange", Color::new(0xFF, 0xA5, 0x00)),
    ("Gray", Color::new(0x80, 0x80, 0x80)),
    ("Green", Color::new(0x00, 0x80, 0x00)),
    ("Light Blue", Color::new(0x00, 0xBF, 0xFF)),
    ("Blue", Color::new(0x00, 0x00, 0xFF)),
    ("Yellow", Color::new(0xFF, 0xFF, 0x00)),
    ("White", Color::new(0xFF, 0xFF, 0xFF)),
    ("Purple", Color::new(0x80, 0x00, 0x80)),
    ("Black", Color::new(0x00, 0x00, 0x00)),
    ("Gold", Color::new(0xFF, 0xD7, 0x00)),
    ("Pink", Color::new(0xFF, 0xC0, 0xCB)),
    ("Cream", Color::new(0xFF, 0xF5, 0xE1)),
    ("Brown", Color::new(0x8B, 0x45, 0x13)),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCatalog {
    colors: BTreeMap<String, Color>,
}

impl Default for ColorCatalog {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .map(|(name, color)| (name.to_string(), *color))
                .collect(),
        }
    }
}

impl ColorCatalog {
    pub fn new(colors: BTreeMap<String, Color>) -> Self {
        Self { colors }
    }

    /// Parse `{ "Name": "#rrggbb", ... }`.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let colors: BTreeMap<String, Color> = serde_json::from_str(json)?;
        Ok(Self { colors })
    }

    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        Self::from_json(&read_table(path)?)
    }

    /// Exact match first, then case-insensitive.
    pub fn get(&self, id: &str) -> Option<Color> {
        self.colors.get(id).copied().or_else(|| {
            self.colors
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(id))
                .map(|(_, color)| *color)
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
