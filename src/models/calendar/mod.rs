//! Month-view calendar model.
//!
//! A [`CalendarGrid`] is rebuilt from scratch whenever the displayed month
//! changes; cells are plain values and are never updated in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days per grid row (Sunday through Saturday).
pub const DAYS_PER_WEEK: usize = 7;
/// Enough rows for any Gregorian month starting on any weekday.
pub const MAX_WEEKS: usize = 6;

/// One day in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub is_in_displayed_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

pub type CalendarWeek = [CalendarCell; DAYS_PER_WEEK];

/// Sunday-first weeks covering a single month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    /// First day of the displayed month
    pub month: NaiveDate,
    pub weeks: Vec<CalendarWeek>,
}

impl CalendarGrid {
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flat_map(|week| week.iter())
    }

    pub fn today(&self) -> Option<&CalendarCell> {
        self.cells().find(|cell| cell.is_today)
    }

    pub fn selected(&self) -> Option<&CalendarCell> {
        self.cells().find(|cell| cell.is_selected)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.first_date(), self.last_date()) {
            (Some(first), Some(last)) => first <= date && date <= last,
            _ => false,
        }
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.weeks.first().map(|week| week[0].date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.weeks.last().map(|week| week[DAYS_PER_WEEK - 1].date)
    }
}
