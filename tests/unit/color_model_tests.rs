// Parameterized unit tests for the color model and contrast resolver

use lucky_color::models::color::{hex_to_rgb, hsl_to_hex, Color, ColorError, Hsl};
use lucky_color::services::contrast::{pick_foreground_for, Foreground};
use lucky_color::services::palette::derive_related_hex;
use test_case::test_case;

#[test_case("#FF0000", Color::new(255, 0, 0); "red with hash")]
#[test_case("00bfff", Color::new(0, 191, 255); "light blue without hash")]
#[test_case("#FfF5e1", Color::new(255, 245, 225); "cream mixed case")]
fn test_hex_parses(input: &str, expected: Color) {
    assert_eq!(hex_to_rgb(input), Ok(expected));
}

#[test_case("#F00"; "short form")]
#[test_case("#FF00000"; "seven digits")]
#[test_case("#FF00ZZ"; "non hex")]
#[test_case("red"; "color name")]
fn test_hex_rejects(input: &str) {
    assert!(matches!(hex_to_rgb(input), Err(ColorError::InvalidFormat(_))));
}

#[test_case("#FFFFFF", Foreground::Dark; "white")]
#[test_case("#000000", Foreground::Light; "black")]
#[test_case("#FF0000", Foreground::Light; "red")]
#[test_case("#FFD700", Foreground::Dark; "gold")]
#[test_case("#FFF5E1", Foreground::Dark; "cream")]
#[test_case("#808080", Foreground::Light; "gray")]
#[test_case("#8B4513", Foreground::Light; "brown")]
fn test_foreground_for_catalog_colors(hex: &str, expected: Foreground) {
    assert_eq!(pick_foreground_for(hex_to_rgb(hex).unwrap()), expected);
}

#[test_case(Hsl::new(0.0, 100.0, 50.0), "#ff0000"; "red")]
#[test_case(Hsl::new(240.0, 100.0, 50.0), "#0000ff"; "blue")]
#[test_case(Hsl::new(0.0, 0.0, 0.0), "#000000"; "black")]
#[test_case(Hsl::new(123.0, 0.0, 100.0), "#ffffff"; "white ignores hue")]
fn test_hsl_to_hex(hsl: Hsl, expected: &str) {
    assert_eq!(hsl_to_hex(hsl), expected);
}

#[test]
fn test_palette_for_red_matches_documented_example() {
    let palette = derive_related_hex("#FF0000").unwrap();
    assert_eq!(palette[0], "#ff0000");
    assert_eq!(palette[1], "#00ffff");
}
