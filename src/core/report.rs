//! Dashboard report generation and display formatting.
//!
//! This module assembles the dashboard view-model (greeting, stat cards,
//! recent bookings, venue search) and provides the text formatting helpers
//! shared by every view. All functions are framework-agnostic and return
//! structured data or plain strings that the bot layer can render.

use crate::{
    core::{
        booking::{self, BookingStats, RECENT_LIMIT},
        calendar::{CalendarMonth, WEEKDAY_HEADERS},
        store::MockStore,
        venue::{self, CategoryFilter},
    },
    entities::{Booking, BookingStatus, Venue},
};

/// One headline number on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    /// Card title
    pub title: &'static str,
    /// Formatted value
    pub value: String,
    /// Optional trend badge
    pub trend: Option<&'static str>,
    /// Whether the trend badge reads as good news
    pub trend_up: bool,
}

/// A recent booking joined with its venue for display.
#[derive(Debug, Clone)]
pub struct RecentBooking<'a> {
    /// The booking
    pub booking: &'a Booking,
    /// The booked venue, `None` if the id dangles
    pub venue: Option<&'a Venue>,
}

impl RecentBooking<'_> {
    /// Venue name or the unknown-venue fallback.
    #[must_use]
    pub fn venue_name(&self) -> &str {
        self.venue
            .map_or(crate::core::store::UNKNOWN_VENUE, |venue| venue.name.as_str())
    }
}

/// Everything the dashboard shows.
#[derive(Debug, Clone)]
pub struct DashboardReport<'a> {
    /// Header line
    pub greeting: String,
    /// Counters, signed-in only
    pub stats: Option<BookingStats>,
    /// Stat cards derived from `stats`
    pub cards: Vec<StatCard>,
    /// Latest bookings, signed-in only
    pub recent: Vec<RecentBooking<'a>>,
    /// Venue search results, shown to guests
    pub venues: Vec<&'a Venue>,
}

/// Builds the dashboard for a signed-in `identity`, or the guest dashboard
/// when `identity` is `None`.
///
/// Guests get the searchable venue list; signed-in customers get their
/// booking stats and the [`RECENT_LIMIT`] most recent bookings.
#[must_use]
pub fn generate_dashboard_report<'a>(
    store: &'a MockStore,
    identity: Option<&str>,
    filter: CategoryFilter,
    search: &str,
) -> DashboardReport<'a> {
    let Some(identity) = identity else {
        return DashboardReport {
            greeting: "Explore our premium venues.".to_string(),
            stats: None,
            cards: Vec::new(),
            recent: Vec::new(),
            venues: venue::search_venues(store.venues(), filter, search),
        };
    };

    let mine = booking::filter_by_identity(store.bookings(), identity);
    let stats = BookingStats::from_bookings(&mine);
    let recent = booking::recent(&mine, RECENT_LIMIT)
        .into_iter()
        .map(|booking| RecentBooking {
            booking,
            venue: store.venue(&booking.venue_id),
        })
        .collect();

    DashboardReport {
        greeting: format!("Welcome back, {identity}."),
        stats: Some(stats),
        cards: stat_cards(&stats),
        recent,
        venues: Vec::new(),
    }
}

/// The four dashboard cards for `stats`.
#[must_use]
pub fn stat_cards(stats: &BookingStats) -> Vec<StatCard> {
    let all_clear = stats.pending == 0;
    vec![
        StatCard {
            title: "Total Bookings",
            value: stats.total_bookings.to_string(),
            trend: None,
            trend_up: false,
        },
        StatCard {
            title: "Active Bookings",
            value: stats.confirmed.to_string(),
            trend: Some("Upcoming"),
            trend_up: true,
        },
        StatCard {
            title: "Action Items",
            value: stats.pending.to_string(),
            trend: Some(if all_clear { "Clear" } else { "Ask" }),
            trend_up: all_clear,
        },
        StatCard {
            title: "Total Spent",
            value: format_rupees(stats.total_spent),
            trend: None,
            trend_up: false,
        },
    ]
}

/// Formats an amount in rupees with thousands separators.
///
/// Whole amounts have no decimals (`₹4,520`); anything else gets two
/// (`₹1,234.50`).
#[must_use]
pub fn format_rupees(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    // Work in paise to avoid float formatting surprises.
    // Cast safety: booking totals are far below 2^53 paise.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let paise = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(paise / 100);
    let fraction = paise % 100;

    if fraction == 0 {
        format!("{sign}₹{whole}")
    } else {
        format!("{sign}₹{whole}.{fraction:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Status with its coloured indicator, e.g. `🟡 Pending`.
#[must_use]
pub fn format_status(status: BookingStatus) -> String {
    format!("{} {}", status.indicator(), status.label())
}

/// One-line summary of a booking for lists.
#[must_use]
pub fn format_booking_summary(booking: &Booking, venue_name: &str) -> String {
    format!(
        "`{}` | {} | {} | {}h | {} | {}",
        booking.id,
        venue_name,
        booking.date.format("%a, %b %-d %Y"),
        booking.duration_hours,
        format_status(booking.status),
        format_rupees(booking.total_price)
    )
}

/// Monospace month grid. Today is bracketed and days with bookings carry a
/// dot, e.g. `[15•]`.
#[must_use]
pub fn format_calendar_grid(calendar: &CalendarMonth<'_>) -> String {
    let mut grid: String = WEEKDAY_HEADERS
        .iter()
        .map(|header| format!("{header:^5}"))
        .collect();
    grid.push('\n');

    for week in calendar.weeks() {
        for cell in week {
            match cell {
                Some(day) => {
                    let (open, close) = if day.is_today { ('[', ']') } else { (' ', ' ') };
                    let dot = if day.bookings.is_empty() { ' ' } else { '•' };
                    grid.push_str(&format!("{open}{:>2}{dot}{close}", day.day));
                }
                None => grid.push_str("     "),
            }
        }
        grid.push('\n');
    }
    grid
}
