// Date utility functions
// Calendar-date comparison, month arithmetic and canonical weekday keys

use chrono::{Datelike, NaiveDate, Weekday};

/// Canonical English weekday names, Sunday first. These are the lookup keys
/// of every day-keyed table regardless of display language.
pub const WEEKDAY_KEYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Calendar date of any chrono value, dropping the time of day.
pub fn calendar_date<D: Datelike>(value: &D) -> NaiveDate {
    NaiveDate::from_ymd_opt(value.year(), value.month(), value.day())
        .unwrap_or(NaiveDate::MIN)
}

pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

pub fn first_of_month<D: Datelike>(value: &D) -> NaiveDate {
    NaiveDate::from_ymd_opt(value.year(), value.month(), 1).unwrap_or(NaiveDate::MIN)
}

pub fn last_of_month<D: Datelike>(value: &D) -> NaiveDate {
    let first = first_of_month(value);
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

/// Shift by whole months, clamping the day to the target month's length
/// (Jan 31 + 1 month is Feb 28/29).
pub fn shift_month(date: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = date.year() * 12 + (date.month() as i32 - 1) + delta_months;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return date;
    };
    let max_day = last_of_month(&first).day();
    first.with_day(date.day().min(max_day)).unwrap_or(first)
}

pub fn weekday_key(weekday: Weekday) -> &'static str {
    WEEKDAY_KEYS[weekday.num_days_from_sunday() as usize]
}

/// Weekday key ("Monday", ...) for a date.
pub fn weekday_key_for<D: Datelike>(value: &D) -> &'static str {
    weekday_key(value.weekday())
}

/// Parse a canonical weekday key. Matching is case-insensitive.
pub fn parse_weekday_key(key: &str) -> Option<Weekday> {
    WEEKDAY_KEYS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(key.trim()))
        .map(|idx| SUNDAY_FIRST[idx])
}
