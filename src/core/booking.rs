//! Booking query engine.
//!
//! Pure functions that turn the flat booking collection into what the views
//! show: the signed-in customer's bookings, narrowed to a month, grouped by
//! day, capped for display, summarised and sorted. Every function borrows
//! its input and returns references into it, so the store is never copied.

use crate::core::calendar::YearMonth;
use crate::entities::{Booking, BookingStatus};
use std::fmt;

/// Maximum number of booking pills rendered in a single calendar day.
pub const DAY_DISPLAY_LIMIT: usize = 3;

/// Number of bookings shown in the dashboard's recent list.
pub const RECENT_LIMIT: usize = 5;

/// Returns the bookings whose customer name equals `identity` exactly.
///
/// Matching is case-sensitive. An identity with no bookings yields an
/// empty vector.
#[must_use]
pub fn filter_by_identity<'a>(bookings: &'a [Booking], identity: &str) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|booking| booking.customer_name == identity)
        .collect()
}

/// Returns the bookings dated within `month`, preserving input order.
#[must_use]
pub fn filter_by_month<'a>(bookings: &[&'a Booking], month: YearMonth) -> Vec<&'a Booking> {
    bookings
        .iter()
        .copied()
        .filter(|booking| month.contains(booking.date))
        .collect()
}

/// Bookings of one month partitioned by day of month.
#[derive(Debug, Clone)]
pub struct DayGrouping<'a> {
    month: YearMonth,
    // Index 0 holds day 1.
    days: Vec<Vec<&'a Booking>>,
}

impl<'a> DayGrouping<'a> {
    /// The month this grouping covers.
    #[must_use]
    pub const fn month(&self) -> YearMonth {
        self.month
    }

    /// Bookings on `day` (1-based) in source order. Days outside the month
    /// are simply empty.
    #[must_use]
    pub fn day(&self, day: u32) -> &[&'a Booking] {
        day.checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| self.days.get(index))
            .map_or(&[], Vec::as_slice)
    }

    /// Iterates `(day, bookings)` for every day of the month, empty days included.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[&'a Booking])> + '_ {
        (1..).zip(self.days.iter().map(Vec::as_slice))
    }

    /// Total number of bookings across all days.
    #[must_use]
    pub fn total(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}

/// Partitions `bookings` into one sequence per day of `month`.
///
/// Within a day, bookings keep the order they have in `bookings`. Bookings
/// dated outside `month` are ignored, so callers normally pass the output of
/// [`filter_by_month`].
#[must_use]
pub fn group_by_day<'a>(bookings: &[&'a Booking], month: YearMonth) -> DayGrouping<'a> {
    let day_count = month.days_in_month() as usize;
    let mut days: Vec<Vec<&'a Booking>> = vec![Vec::new(); day_count];

    for booking in bookings.iter().copied() {
        if let Some(slot) = month
            .day_index(booking.date)
            .and_then(|index| days.get_mut(index))
        {
            slot.push(booking);
        }
    }

    DayGrouping { month, days }
}

/// A day's bookings truncated for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CappedDay<'s, 'a> {
    /// The first bookings of the day, at most the cap
    pub shown: &'s [&'a Booking],
    /// How many bookings were left out
    pub overflow: usize,
}

/// Truncates a day's bookings to `limit` entries and reports the remainder.
///
/// Display policy only: the caller still owns the full slice for contexts
/// that show every booking, such as the compact dot indicators.
#[must_use]
pub fn cap_day<'s, 'a>(bookings: &'s [&'a Booking], limit: usize) -> CappedDay<'s, 'a> {
    let shown_len = bookings.len().min(limit);
    CappedDay {
        shown: &bookings[..shown_len],
        overflow: bookings.len().saturating_sub(limit),
    }
}

/// Summary counters for a customer's bookings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BookingStats {
    /// Number of bookings
    pub total_bookings: usize,
    /// Bookings with status confirmed
    pub confirmed: usize,
    /// Bookings with status pending
    pub pending: usize,
    /// Sum of total prices, all statuses included
    pub total_spent: f64,
}

impl BookingStats {
    /// Reduces a booking subset to its counters. All zero on empty input.
    #[must_use]
    pub fn from_bookings(bookings: &[&Booking]) -> Self {
        bookings.iter().fold(Self::default(), |mut stats, booking| {
            stats.total_bookings += 1;
            match booking.status {
                BookingStatus::Confirmed => stats.confirmed += 1,
                BookingStatus::Pending => stats.pending += 1,
                BookingStatus::Cancelled => {}
            }
            stats.total_spent += booking.total_price;
            stats
        })
    }
}

/// Sorts newest first. Stable, so same-day bookings keep their relative order.
pub fn sort_by_date_desc(bookings: &mut [&Booking]) {
    bookings.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Returns the `n` most recent bookings, newest first.
#[must_use]
pub fn recent<'a>(bookings: &[&'a Booking], n: usize) -> Vec<&'a Booking> {
    let mut sorted = bookings.to_vec();
    sort_by_date_desc(&mut sorted);
    sorted.truncate(n);
    sorted
}

/// Status filter of the bookings list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every status
    #[default]
    All,
    /// A single status
    Only(BookingStatus),
}

impl StatusFilter {
    /// Options in menu order.
    pub const OPTIONS: [Self; 4] = [
        Self::All,
        Self::Only(BookingStatus::Confirmed),
        Self::Only(BookingStatus::Pending),
        Self::Only(BookingStatus::Cancelled),
    ];

    /// Parses `"all"`, `"confirmed"`, `"pending"` or `"cancelled"`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::OPTIONS
            .into_iter()
            .find(|filter| filter.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Identifier for parsing and routing.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Statuses",
            Self::Only(status) => status.label(),
        }
    }

    /// Whether `booking` passes the filter.
    #[must_use]
    pub fn matches(self, booking: &Booking) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => booking.status == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the bookings matching `filter`, preserving input order.
#[must_use]
pub fn filter_by_status<'a>(bookings: &[&'a Booking], filter: StatusFilter) -> Vec<&'a Booking> {
    bookings
        .iter()
        .copied()
        .filter(|booking| filter.matches(booking))
        .collect()
}

/// The bookings list: one identity, one status filter, newest first.
#[must_use]
pub fn list_bookings<'a>(
    bookings: &'a [Booking],
    identity: &str,
    filter: StatusFilter,
) -> Vec<&'a Booking> {
    let mine = filter_by_identity(bookings, identity);
    let mut listed = filter_by_status(&mine, filter);
    sort_by_date_desc(&mut listed);
    listed
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    fn ids(bookings: &[&Booking]) -> Vec<String> {
        bookings.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_filter_by_identity_returns_only_matching_subset() {
        let store = seeded_store();
        let mine = filter_by_identity(store.bookings(), "Pavan");

        assert_eq!(mine.len(), 6);
        assert!(mine.len() <= store.bookings().len());
        assert!(mine.iter().all(|b| b.customer_name == "Pavan"));
    }

    #[test]
    fn test_filter_by_identity_is_case_sensitive() {
        let store = seeded_store();
        assert!(filter_by_identity(store.bookings(), "pavan").is_empty());
    }

    #[test]
    fn test_filter_by_identity_unknown_is_empty() {
        let store = seeded_store();
        assert!(filter_by_identity(store.bookings(), "Nobody").is_empty());
        assert!(filter_by_identity(&[], "Pavan").is_empty());
    }

    #[test]
    fn test_filter_by_month_excludes_adjacent_days() {
        let bookings = vec![
            booking("before", "Pavan", ymd(2024, 2, 29), BookingStatus::Confirmed, 10.0),
            booking("first", "Pavan", ymd(2024, 3, 1), BookingStatus::Confirmed, 10.0),
            booking("last", "Pavan", ymd(2024, 3, 31), BookingStatus::Pending, 10.0),
            booking("after", "Pavan", ymd(2024, 4, 1), BookingStatus::Confirmed, 10.0),
            booking("other_year", "Pavan", ymd(2023, 3, 15), BookingStatus::Confirmed, 10.0),
        ];
        let refs: Vec<&Booking> = bookings.iter().collect();
        let march = YearMonth::new(2024, 3).unwrap();

        let in_month = filter_by_month(&refs, march);

        assert_eq!(ids(&in_month), vec!["first", "last"]);
        assert!(in_month.iter().all(|b| march.contains(b.date)));
    }

    #[test]
    fn test_group_by_day_partitions_without_loss() {
        let march = YearMonth::new(2024, 3).unwrap();
        let mut bookings = Vec::new();
        // Day d gets (d - 1) % 11 bookings, so counts range over 0..=10.
        for day in 1..=31 {
            for n in 0..((day - 1) % 11) {
                bookings.push(booking(
                    &format!("d{day}-{n}"),
                    "Pavan",
                    ymd(2024, 3, day),
                    BookingStatus::Confirmed,
                    1.0,
                ));
            }
        }
        let refs: Vec<&Booking> = bookings.iter().collect();

        let grouping = group_by_day(&refs, march);

        assert_eq!(grouping.total(), bookings.len());
        assert_eq!(grouping.iter().count(), 31);
        for (day, day_bookings) in grouping.iter() {
            assert_eq!(day_bookings.len(), ((day - 1) % 11) as usize);
            assert!(day_bookings.iter().all(|b| b.date == ymd(2024, 3, day)));
        }
        assert!(grouping.day(0).is_empty());
        assert!(grouping.day(32).is_empty());
    }

    #[test]
    fn test_group_by_day_keeps_source_order_within_day() {
        let bookings = vec![
            booking("z", "Pavan", ymd(2024, 3, 4), BookingStatus::Pending, 1.0),
            booking("a", "Pavan", ymd(2024, 3, 4), BookingStatus::Confirmed, 1.0),
            booking("m", "Pavan", ymd(2024, 3, 4), BookingStatus::Cancelled, 1.0),
        ];
        let refs: Vec<&Booking> = bookings.iter().collect();

        let grouping = group_by_day(&refs, YearMonth::new(2024, 3).unwrap());

        assert_eq!(ids(grouping.day(4)), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_group_by_day_handles_leap_february() {
        let bookings = vec![booking(
            "leap",
            "Pavan",
            ymd(2024, 2, 29),
            BookingStatus::Confirmed,
            1.0,
        )];
        let refs: Vec<&Booking> = bookings.iter().collect();

        let grouping = group_by_day(&refs, YearMonth::new(2024, 2).unwrap());

        assert_eq!(grouping.iter().count(), 29);
        assert_eq!(grouping.day(29).len(), 1);
    }

    #[test]
    fn test_cap_day_counts() {
        for (k, shown, overflow) in [(0, 0, 0), (1, 1, 0), (3, 3, 0), (4, 3, 1), (10, 3, 7)] {
            let bookings: Vec<Booking> = (0..k)
                .map(|i| {
                    booking(
                        &format!("b{i}"),
                        "Pavan",
                        ymd(2024, 3, 1),
                        BookingStatus::Confirmed,
                        1.0,
                    )
                })
                .collect();
            let refs: Vec<&Booking> = bookings.iter().collect();

            let capped = cap_day(&refs, DAY_DISPLAY_LIMIT);

            assert_eq!(capped.shown.len(), shown, "K={k}");
            assert_eq!(capped.overflow, overflow, "K={k}");
        }
    }

    #[test]
    fn test_stats_on_empty_input_are_zero() {
        let stats = BookingStats::from_bookings(&[]);
        assert_eq!(stats, BookingStats::default());
        assert_eq!(stats.total_spent, 0.0);
    }

    #[test]
    fn test_stats_for_demo_customer() {
        let store = seeded_store();
        let mine = filter_by_identity(store.bookings(), "Pavan");

        let stats = BookingStats::from_bookings(&mine);

        assert_eq!(stats.total_bookings, 6);
        assert_eq!(stats.confirmed, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.total_spent, 4520.0);
    }

    #[test]
    fn test_stats_count_cancelled_only_in_total() {
        let bookings = vec![
            booking("c", "Pavan", ymd(2024, 3, 1), BookingStatus::Cancelled, 50.0),
            booking("p", "Pavan", ymd(2024, 3, 2), BookingStatus::Pending, 25.0),
        ];
        let refs: Vec<&Booking> = bookings.iter().collect();

        let stats = BookingStats::from_bookings(&refs);

        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.confirmed, 0);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.total_spent, 75.0);
    }

    #[test]
    fn test_recent_sorts_descending_and_is_stable() {
        let bookings = vec![
            booking("old", "Pavan", ymd(2024, 1, 1), BookingStatus::Confirmed, 1.0),
            booking("tie_first", "Pavan", ymd(2024, 3, 10), BookingStatus::Confirmed, 1.0),
            booking("newest", "Pavan", ymd(2024, 4, 1), BookingStatus::Pending, 1.0),
            booking("tie_second", "Pavan", ymd(2024, 3, 10), BookingStatus::Confirmed, 1.0),
        ];
        let refs: Vec<&Booking> = bookings.iter().collect();

        let latest = recent(&refs, 3);

        assert_eq!(ids(&latest), vec!["newest", "tie_first", "tie_second"]);
    }

    #[test]
    fn test_recent_takes_at_most_n() {
        let store = seeded_store();
        let mine = filter_by_identity(store.bookings(), "Pavan");

        let latest = recent(&mine, RECENT_LIMIT);

        assert_eq!(ids(&latest), vec!["b11", "b9", "b7", "b5", "b3"]);
        assert!(recent(&[], RECENT_LIMIT).is_empty());
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!(StatusFilter::from_id("all"), Some(StatusFilter::All));
        assert_eq!(
            StatusFilter::from_id("Pending"),
            Some(StatusFilter::Only(BookingStatus::Pending))
        );
        assert_eq!(StatusFilter::from_id("lost"), None);
        assert_eq!(StatusFilter::All.label(), "All Statuses");
    }

    #[test]
    fn test_list_bookings_filters_and_sorts() {
        let store = seeded_store();

        let pending = list_bookings(
            store.bookings(),
            "Pavan",
            StatusFilter::Only(BookingStatus::Pending),
        );
        assert_eq!(ids(&pending), vec!["b9", "b3"]);

        let all = list_bookings(store.bookings(), "Pavan", StatusFilter::All);
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].id, "b11");
        assert_eq!(all[5].id, "b1");
    }
}
