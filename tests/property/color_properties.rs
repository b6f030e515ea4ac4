// Property-based tests for color conversion, contrast, palettes and month grids

use chrono::{Datelike, NaiveDate};
use lucky_color::models::color::{hex_to_rgb, hsl_to_hex, rgb_to_hex, rgb_to_hsl, Color};
use lucky_color::services::calendar::build_month_grid;
use lucky_color::services::contrast::{luma, pick_foreground_for, Foreground, LUMA_THRESHOLD};
use lucky_color::services::palette::derive_related_colors;
use proptest::prelude::*;

fn any_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::new(r, g, b))
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900..2200i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    /// Property: hex encoding is lossless
    #[test]
    fn prop_hex_round_trip(color in any_color()) {
        prop_assert_eq!(hex_to_rgb(&rgb_to_hex(color)).unwrap(), color);
    }

    /// Property: upper-case input parses to the same color
    #[test]
    fn prop_hex_case_insensitive(color in any_color()) {
        let upper = rgb_to_hex(color).to_uppercase();
        prop_assert_eq!(hex_to_rgb(&upper).unwrap(), color);
    }

    /// Property: RGB -> HSL -> RGB drifts by at most one per channel
    #[test]
    fn prop_hsl_round_trip_within_one(color in any_color()) {
        let hsl = rgb_to_hsl(color.r, color.g, color.b);
        prop_assert!((0.0..360.0).contains(&hsl.h));
        prop_assert!((0.0..=100.0).contains(&hsl.s));
        prop_assert!((0.0..=100.0).contains(&hsl.l));

        let back = hex_to_rgb(&hsl_to_hex(hsl)).unwrap();
        prop_assert!((back.r as i32 - color.r as i32).abs() <= 1);
        prop_assert!((back.g as i32 - color.g as i32).abs() <= 1);
        prop_assert!((back.b as i32 - color.b as i32).abs() <= 1);
    }

    /// Property: the foreground depends only on the luma threshold
    #[test]
    fn prop_foreground_matches_threshold(color in any_color()) {
        let expected = if luma(color) >= LUMA_THRESHOLD { Foreground::Dark } else { Foreground::Light };
        prop_assert_eq!(pick_foreground_for(color), expected);
        prop_assert_eq!(pick_foreground_for(color), pick_foreground_for(color));
    }

    /// Property: palette keeps base first and its inverse second
    #[test]
    fn prop_palette_structure(color in any_color()) {
        let palette = derive_related_colors(color);
        prop_assert_eq!(palette.len(), 4);
        prop_assert_eq!(palette[0], color);
        prop_assert_eq!(palette[1], Color::new(255 - color.r, 255 - color.g, 255 - color.b));
        // Analogous entries are fully saturated at 50% lightness
        for analogous in &palette[2..] {
            let hsl = rgb_to_hsl(analogous.r, analogous.g, analogous.b);
            prop_assert!((hsl.s - 100.0).abs() < 1.0);
            prop_assert!((hsl.l - 50.0).abs() < 1.0);
        }
    }

    /// Property: grids have 4-6 full weeks starting on Sunday and cover the month
    #[test]
    fn prop_grid_shape(anchor in any_date(), today in any_date()) {
        let grid = build_month_grid(&anchor, &today, &anchor);
        prop_assert!((4..=6).contains(&grid.weeks.len()));
        prop_assert_eq!(grid.first_date().unwrap().weekday(), chrono::Weekday::Sun);

        let in_month: Vec<_> = grid.cells().filter(|c| c.is_in_displayed_month).collect();
        prop_assert!(in_month.iter().all(|c| c.date.month() == anchor.month() && c.date.year() == anchor.year()));
        prop_assert_eq!(in_month.first().unwrap().date.day(), 1);
        prop_assert!(in_month.last().unwrap().date.succ_opt().unwrap().month() != anchor.month());

        let today_count = grid.cells().filter(|c| c.is_today).count();
        prop_assert_eq!(today_count, usize::from(grid.contains(today)));
        prop_assert_eq!(grid.cells().filter(|c| c.is_selected).count(), 1);
    }
}
