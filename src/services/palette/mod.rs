//! Look palette derived from a single base color.
//!
//! The analogous entries discard the base color's saturation and lightness
//! and use a fixed 100% / 50%, so every generated look is fully vivid.

use crate::models::color::{hex_to_rgb, hsl_to_rgb, Color, ColorError, Hsl};

const ANALOGOUS_SATURATION: f64 = 100.0;
const ANALOGOUS_LIGHTNESS: f64 = 50.0;

/// Hue offsets (degrees) for the two analogous entries.
pub const ANALOGOUS_STEPS: [f64; 2] = [30.0, 60.0];

/// Returns `[base, complementary, analogous1, analogous2]`.
pub fn derive_related_colors(base: Color) -> [Color; 4] {
    let hue = base.to_hsl().h;
    let analogous = |step: f64| {
        hsl_to_rgb(Hsl::new(
            (hue + step) % 360.0,
            ANALOGOUS_SATURATION,
            ANALOGOUS_LIGHTNESS,
        ))
    };

    [
        base,
        base.inverted(),
        analogous(ANALOGOUS_STEPS[0]),
        analogous(ANALOGOUS_STEPS[1]),
    ]
}

/// Hex convenience wrapper around [`derive_related_colors`].
pub fn derive_related_hex(hex: &str) -> Result<[String; 4], ColorError> {
    let base = hex_to_rgb(hex)?;
    Ok(derive_related_colors(base).map(|color| color.to_hex()))
}
