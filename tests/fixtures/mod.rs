// Test fixtures - reusable test data
// Provides consistent tables and dates across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use lucky_color::models::day_colors::{DayColorTable, LookTable};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, March 10, 2025
    pub fn monday_mar_10_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

/// Sample tables for testing
pub mod tables {
    use super::*;

    pub const DAY_COLORS_JSON: &str = r#"{
        "Sunday": { "lucky": ["Red", "Pink"], "unlucky": ["Blue"] },
        "Monday": { "lucky": ["Yellow", "Cream"], "unlucky": ["Red"] },
        "Tuesday": { "lucky": ["Pink", "Purple"], "unlucky": ["Yellow"] },
        "Wednesday": { "lucky": ["Green"], "unlucky": [] },
        "Thursday": { "lucky": ["Orange", "Light Blue"], "unlucky": ["Black"] },
        "Friday": { "lucky": ["Light Blue", "Blue"], "unlucky": ["Gray"] }
    }"#;

    pub const LOOKS_JSON: &str = r##"{
        "Monday": {
            "Confident": { "colors": ["#FFFF00", "#000000"], "names": ["Yellow", "Black"] },
            "Health": { "colors": ["#FFFF00", "#008000"], "names": ["Yellow", "Green"] },
            "Creative": { "colors": ["#FFFF00", "#800080"], "names": ["Yellow", "Purple"] },
            "Charm": { "colors": ["#FFFF00", "#FFC0CB"], "names": ["Yellow", "Pink"] }
        }
    }"##;

    /// Week table with Saturday deliberately left out
    pub fn day_colors() -> DayColorTable {
        DayColorTable::from_json(DAY_COLORS_JSON).unwrap()
    }

    pub fn looks() -> LookTable {
        LookTable::from_json(LOOKS_JSON).unwrap()
    }
}
