//! Readable foreground selection for color swatches.
//!
//! Uses BT.601 luma weights against a fixed threshold of 186 (on the 0–255
//! scale). Luma is accumulated in thousandths so that the threshold compares
//! exactly for integer channels.

use crate::models::color::Color;
use serde::{Deserialize, Serialize};

/// Luma at or above which a swatch gets a dark foreground.
pub const LUMA_THRESHOLD: f64 = 186.0;

const NEAR_BLACK: Color = Color::new(0, 0, 0);
const NEAR_WHITE: Color = Color::new(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Foreground {
    Dark,
    Light,
}

impl Foreground {
    pub fn for_luma(luma: f64) -> Self {
        if luma >= LUMA_THRESHOLD {
            Foreground::Dark
        } else {
            Foreground::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Foreground::Dark => "dark",
            Foreground::Light => "light",
        }
    }

    /// Concrete text color for this decision.
    pub fn color(self) -> Color {
        match self {
            Foreground::Dark => NEAR_BLACK,
            Foreground::Light => NEAR_WHITE,
        }
    }
}

impl std::fmt::Display for Foreground {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Perceptual brightness `0.299 R + 0.587 G + 0.114 B`.
pub fn luma(color: Color) -> f64 {
    let milli = 299 * color.r as u32 + 587 * color.g as u32 + 114 * color.b as u32;
    milli as f64 / 1000.0
}

pub fn pick_foreground_for(background: Color) -> Foreground {
    Foreground::for_luma(luma(background))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Color::WHITE, Foreground::Dark; "white background")]
    #[test_case(Color::BLACK, Foreground::Light; "black background")]
    #[test_case(Color::new(255, 0, 0), Foreground::Light; "pure red")]
    #[test_case(Color::new(255, 255, 0), Foreground::Dark; "yellow")]
    #[test_case(Color::new(0, 0, 255), Foreground::Light; "blue")]
    #[test_case(Color::new(255, 192, 203), Foreground::Dark; "pink")]
    fn test_pick_foreground(background: Color, expected: Foreground) {
        assert_eq!(pick_foreground_for(background), expected);
    }

    #[test]
    fn test_red_luma() {
        assert!((luma(Color::new(255, 0, 0)) - 76.245).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let at_threshold = Color::new(186, 186, 186);
        assert_eq!(luma(at_threshold), 186.0);
        assert_eq!(pick_foreground_for(at_threshold), Foreground::Dark);
        assert_eq!(Foreground::for_luma(186.0), Foreground::Dark);
        assert_eq!(Foreground::for_luma(185.999), Foreground::Light);
    }

    #[test]
    fn test_just_below_threshold() {
        let below = Color::new(185, 186, 186);
        assert!(luma(below) < LUMA_THRESHOLD);
        assert_eq!(pick_foreground_for(below), Foreground::Light);
    }

    #[test]
    fn test_foreground_colors() {
        assert_eq!(Foreground::Dark.color(), Color::BLACK);
        assert_eq!(Foreground::Light.color(), Color::WHITE);
        assert_eq!(Foreground::Dark.to_string(), "dark");
    }
}
