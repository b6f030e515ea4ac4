//! Day-keyed lookups.
//!
//! A weekday missing from a table is not an error: callers get empty results
//! and the corresponding display simply shows nothing.

use serde::Serialize;

use crate::models::color::{hex_to_rgb, Color};
use crate::models::day_colors::{ColorId, DayColorTable, DayLooks, Look, LookKind, LookTable};
use crate::services::catalog::ColorCatalog;
use crate::services::contrast::{pick_foreground_for, Foreground};

/// Resolved lucky/unlucky ids for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayColors {
    pub lucky: Vec<ColorId>,
    pub unlucky: Vec<ColorId>,
}

/// Whether a day has anything to show under its calendar cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayIndicators {
    pub has_lucky: bool,
    pub has_unlucky: bool,
}

/// A color block ready to render: its label, fill and readable text color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub name: String,
    pub color: Color,
    pub foreground: Foreground,
}

impl Swatch {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            foreground: pick_foreground_for(color),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DaySwatches {
    pub lucky: Vec<Swatch>,
    pub unlucky: Vec<Swatch>,
}

pub fn resolve_day_colors(table: &DayColorTable, day: &str) -> DayColors {
    match table.get(day) {
        Some(record) => DayColors {
            lucky: record.lucky.clone(),
            unlucky: record.unlucky.clone(),
        },
        None => {
            log::debug!("No color data for {:?}, using empty lists", day);
            DayColors::default()
        }
    }
}

pub fn resolve_looks(table: &LookTable, day: &str) -> DayLooks {
    match table.get(day) {
        Some(looks) => looks.clone(),
        None => {
            log::debug!("No looks for {:?}, using empty set", day);
            DayLooks::new()
        }
    }
}

/// Looks in display order. Kinds the day does not define are skipped.
pub fn ordered_looks(looks: &DayLooks) -> Vec<(LookKind, &Look)> {
    LookKind::all()
        .iter()
        .filter_map(|kind| looks.get(kind.key()).map(|look| (*kind, look)))
        .collect()
}

pub fn day_indicators(table: &DayColorTable, day: &str) -> DayIndicators {
    let colors = resolve_day_colors(table, day);
    DayIndicators {
        has_lucky: !colors.lucky.is_empty(),
        has_unlucky: !colors.unlucky.is_empty(),
    }
}

/// Lucky and unlucky colors of `day` as swatches. Ids missing from the
/// catalog are dropped.
pub fn resolve_day_swatches(table: &DayColorTable, catalog: &ColorCatalog, day: &str) -> DaySwatches {
    let colors = resolve_day_colors(table, day);
    let to_swatches = |ids: &[ColorId]| -> Vec<Swatch> {
        ids.iter()
            .filter_map(|id| match catalog.get(id) {
                Some(color) => Some(Swatch::new(id.as_str(), color)),
                None => {
                    log::warn!("Unknown color {:?} for {}; skipping", id, day);
                    None
                }
            })
            .collect()
    };

    DaySwatches {
        lucky: to_swatches(&colors.lucky),
        unlucky: to_swatches(&colors.unlucky),
    }
}

/// Swatches of a look, in order. Entries whose color is not valid hex are
/// dropped together with their name so the pairing stays aligned.
pub fn look_swatches(look: &Look) -> Vec<Swatch> {
    look.entries()
        .filter_map(|(hex, name)| match hex_to_rgb(hex) {
            Ok(color) => Some(Swatch::new(name, color)),
            Err(err) => {
                log::warn!("Skipping look entry {:?}: {}", name, err);
                None
            }
        })
        .collect()
}
