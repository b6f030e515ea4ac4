// Month grid builder and month navigation
// Each navigation step rebuilds the whole grid; nothing is patched in place.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::calendar::{CalendarCell, CalendarGrid, CalendarWeek, DAYS_PER_WEEK, MAX_WEEKS};
use crate::utils::date::{
    calendar_date, first_of_month, is_same_day, last_of_month, shift_month, weekday_key_for,
};

/// Build the Sunday-first grid for the month containing `month_anchor`.
///
/// Only calendar dates are compared, so any time-of-day carried by the inputs
/// is ignored. The grid holds between four and six weeks: rows are emitted
/// until the first row whose Saturday reaches the last day of the month.
pub fn build_month_grid<A, T, S>(month_anchor: &A, today: &T, selected: &S) -> CalendarGrid
where
    A: Datelike,
    T: Datelike,
    S: Datelike,
{
    let first_day = first_of_month(month_anchor);
    let last_day = last_of_month(month_anchor);
    let offset = first_day.weekday().num_days_from_sunday() as i64;
    let grid_start = first_day - Duration::days(offset);

    let mut weeks: Vec<CalendarWeek> = Vec::with_capacity(MAX_WEEKS);
    let mut cursor = grid_start;

    while weeks.len() < MAX_WEEKS {
        let week: CalendarWeek = std::array::from_fn(|idx| {
            let date = cursor + Duration::days(idx as i64);
            CalendarCell {
                date,
                is_in_displayed_month: date.year() == first_day.year()
                    && date.month() == first_day.month(),
                is_today: is_same_day(&date, today),
                is_selected: is_same_day(&date, selected),
            }
        });
        let saturday = week[DAYS_PER_WEEK - 1].date;
        weeks.push(week);

        if saturday >= last_day {
            break;
        }
        cursor = cursor + Duration::days(DAYS_PER_WEEK as i64);
    }

    log::trace!(
        "Built month grid for {} with {} weeks",
        first_day.format("%Y-%m"),
        weeks.len()
    );

    CalendarGrid {
        month: first_day,
        weeks,
    }
}

/// Caller-side cursor for a month picker: the displayed month plus the
/// selected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthNavigator {
    displayed_month: NaiveDate,
    selected: NaiveDate,
}

impl MonthNavigator {
    /// Start on `today`'s month with `today` selected.
    pub fn new<D: Datelike>(today: &D) -> Self {
        let today = calendar_date(today);
        Self {
            displayed_month: first_of_month(&today),
            selected: today,
        }
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed_month
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn previous_month(&mut self) {
        self.displayed_month = shift_month(self.displayed_month, -1);
    }

    pub fn next_month(&mut self) {
        self.displayed_month = shift_month(self.displayed_month, 1);
    }

    /// Jump to `today`'s month and select it. Returns the weekday key of today.
    pub fn go_to_today<D: Datelike>(&mut self, today: &D) -> &'static str {
        let today = calendar_date(today);
        self.displayed_month = first_of_month(&today);
        self.selected = today;
        weekday_key_for(&today)
    }

    /// Select a day of the displayed month. Days spilling in from adjacent
    /// months are not selectable and return `None`.
    pub fn select(&mut self, date: NaiveDate) -> Option<&'static str> {
        if first_of_month(&date) != self.displayed_month {
            log::debug!("Ignoring selection of {} outside displayed month", date);
            return None;
        }
        self.selected = date;
        Some(weekday_key_for(&date))
    }

    /// Display the month of `date` and select it.
    pub fn show(&mut self, date: NaiveDate) -> &'static str {
        self.displayed_month = first_of_month(&date);
        self.selected = date;
        weekday_key_for(&date)
    }

    pub fn grid<D: Datelike>(&self, today: &D) -> CalendarGrid {
        build_month_grid(&self.displayed_month, today, &self.selected)
    }
}
