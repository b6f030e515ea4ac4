//! Weekday-keyed color tables.
//!
//! Both tables are external, read-only JSON documents keyed by canonical
//! English weekday names (see [`crate::utils::date::WEEKDAY_KEYS`]):
//!
//! ```json
//! { "Sunday": { "lucky": ["Red", "Pink"], "unlucky": ["Blue"] } }
//! ```
//!
//! ```json
//! { "Sunday": { "Confident": { "colors": ["#FF0000"], "names": ["Red"] } } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Identifier of a named color such as `"Light Blue"`.
pub type ColorId = String;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to read table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Look has {colors} colors but {names} names")]
    MisalignedLook { colors: usize, names: usize },
}

/// Lucky and unlucky colors of one weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayColorRecord {
    #[serde(default)]
    pub lucky: Vec<ColorId>,
    #[serde(default)]
    pub unlucky: Vec<ColorId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayColorTable {
    days: BTreeMap<String, DayColorRecord>,
}

impl DayColorTable {
    pub fn new(days: BTreeMap<String, DayColorRecord>) -> Self {
        Self { days }
    }

    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        Self::from_json(&read_table(path)?)
    }

    pub fn get(&self, day: &str) -> Option<&DayColorRecord> {
        self.days.get(day)
    }

    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// The looks the original content ships for every day, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookKind {
    Confident,
    Health,
    Creative,
    Charm,
}

impl LookKind {
    pub fn all() -> &'static [LookKind] {
        &[
            LookKind::Confident,
            LookKind::Health,
            LookKind::Creative,
            LookKind::Charm,
        ]
    }

    /// Key used in the look table.
    pub fn key(self) -> &'static str {
        match self {
            LookKind::Confident => "Confident",
            LookKind::Health => "Health",
            LookKind::Creative => "Creative",
            LookKind::Charm => "Charm",
        }
    }
}

/// An outfit: colors paired index-by-index with their display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLook")]
pub struct Look {
    colors: Vec<String>,
    names: Vec<String>,
}

#[derive(Deserialize)]
struct RawLook {
    #[serde(default)]
    colors: Vec<String>,
    #[serde(default)]
    names: Vec<String>,
}

impl TryFrom<RawLook> for Look {
    type Error = TableError;

    fn try_from(raw: RawLook) -> Result<Self, Self::Error> {
        Look::new(raw.colors, raw.names)
    }
}

impl Look {
    /// Fails unless `colors` and `names` have the same length.
    pub fn new(colors: Vec<String>, names: Vec<String>) -> Result<Self, TableError> {
        if colors.len() != names.len() {
            return Err(TableError::MisalignedLook {
                colors: colors.len(),
                names: names.len(),
            });
        }
        Ok(Self { colors, names })
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `(color, name)` pairs in order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors
            .iter()
            .zip(self.names.iter())
            .map(|(color, name)| (color.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Looks of a single day, keyed by look name.
pub type DayLooks = BTreeMap<String, Look>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookTable {
    days: BTreeMap<String, DayLooks>,
}

impl LookTable {
    pub fn new(days: BTreeMap<String, DayLooks>) -> Self {
        Self { days }
    }

    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        Self::from_json(&read_table(path)?)
    }

    pub fn get(&self, day: &str) -> Option<&DayLooks> {
        self.days.get(day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

pub(crate) fn read_table(path: &Path) -> Result<String, TableError> {
    std::fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.display().to_string(),
        source,
    })
}
