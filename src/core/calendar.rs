//! Month calendar view-model.
//!
//! Provides Gregorian month arithmetic ([`YearMonth`]) and the month grid
//! the calendar view renders: leading blank cells for the first week, then
//! one cell per day carrying that day's bookings for the signed-in customer.

use crate::{
    core::booking::{self, CappedDay, DAY_DISPLAY_LIMIT},
    entities::Booking,
    errors::{Error, Result},
};
use chrono::{Datelike, Months, NaiveDate};
use std::fmt;

/// Column headers of the month grid, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    // Always the first day of the month.
    first: NaiveDate,
}

impl YearMonth {
    /// Builds a month from a year and a 1-based month number.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMonth`] when `month` is outside 1-12 or the
    /// year is out of chrono's range.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(Error::InvalidMonth { year, month })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        // Day 1 exists in every month chrono can represent.
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// 1-based month number.
    #[must_use]
    pub fn month(self) -> u32 {
        self.first.month()
    }

    /// Number of days in the month, leap years included.
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year()) => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Grid column of the first day, 0 for Sunday through 6 for Saturday.
    #[must_use]
    pub fn first_weekday(self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Whether `date` falls inside this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Zero-based day offset of `date` within the month, `None` outside it.
    #[must_use]
    pub fn day_index(self, date: NaiveDate) -> Option<usize> {
        if self.contains(date) {
            usize::try_from(date.day0()).ok()
        } else {
            None
        }
    }

    /// The date of `day` (1-based) in this month.
    #[must_use]
    pub fn date(self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    /// The following month. Stays put at the end of chrono's range.
    #[must_use]
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// The preceding month. Stays put at the start of chrono's range.
    #[must_use]
    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Applies a navigation step.
    #[must_use]
    pub fn step(self, step: MonthStep, today: NaiveDate) -> Self {
        match step {
            MonthStep::Previous => self.previous(),
            MonthStep::Next => self.next(),
            MonthStep::Today => Self::from_date(today),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%B %Y"))
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Calendar header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    /// One month back
    Previous,
    /// One month forward
    Next,
    /// Jump to the month containing today
    Today,
}

/// One day cell of the month grid.
#[derive(Debug, Clone)]
pub struct CalendarDay<'a> {
    /// Day of month, 1-based
    pub day: u32,
    /// Every booking on this day, in source order
    pub bookings: Vec<&'a Booking>,
    /// Whether this cell is today
    pub is_today: bool,
}

impl<'a> CalendarDay<'a> {
    /// The pills shown in a full-size cell plus the `+N more` count.
    #[must_use]
    pub fn capped(&self) -> CappedDay<'_, 'a> {
        booking::cap_day(&self.bookings, DAY_DISPLAY_LIMIT)
    }

    /// Number of dot indicators in compact mode. Not capped.
    #[must_use]
    pub fn indicator_count(&self) -> usize {
        self.bookings.len()
    }
}

/// The month grid for one customer.
#[derive(Debug, Clone)]
pub struct CalendarMonth<'a> {
    /// The visible month
    pub month: YearMonth,
    /// Empty cells before day 1
    pub leading_blanks: u32,
    /// One entry per day of the month
    pub days: Vec<CalendarDay<'a>>,
}

impl<'a> CalendarMonth<'a> {
    /// Builds the grid for `identity` in `month`.
    ///
    /// `today` only decides which cell gets highlighted; it is highlighted
    /// only when it lies in the visible month.
    #[must_use]
    pub fn build(
        bookings: &'a [Booking],
        identity: &str,
        month: YearMonth,
        today: NaiveDate,
    ) -> Self {
        let mine = booking::filter_by_identity(bookings, identity);
        let in_month = booking::filter_by_month(&mine, month);
        let grouping = booking::group_by_day(&in_month, month);
        let today_index = month.day_index(today);

        let days = grouping
            .iter()
            .map(|(day, day_bookings)| CalendarDay {
                day,
                bookings: day_bookings.to_vec(),
                is_today: today_index.is_some_and(|index| index + 1 == day as usize),
            })
            .collect();

        Self {
            month,
            leading_blanks: month.first_weekday(),
            days,
        }
    }

    /// The cell for `day` (1-based).
    #[must_use]
    pub fn day(&self, day: u32) -> Option<&CalendarDay<'a>> {
        day.checked_sub(1)
            .and_then(|index| self.days.get(index as usize))
    }

    /// Total bookings visible this month.
    #[must_use]
    pub fn booking_count(&self) -> usize {
        self.days.iter().map(CalendarDay::indicator_count).sum()
    }

    /// Grid rows of seven cells; `None` marks padding before day 1 and after
    /// the last day.
    #[must_use]
    pub fn weeks(&self) -> Vec<[Option<&CalendarDay<'a>>; 7]> {
        let mut cells: Vec<Option<&CalendarDay<'a>>> =
            std::iter::repeat_n(None, self.leading_blanks as usize)
                .chain(self.days.iter().map(Some))
                .collect();
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        cells
            .chunks_exact(7)
            .map(|row| {
                let mut week = [None; 7];
                week.copy_from_slice(row);
                week
            })
            .collect()
    }
}
