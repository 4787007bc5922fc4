//! Mock data store - the static venue catalogue and booking seed.
//!
//! Booking dates are generated relative to a caller-supplied "today" so the
//! demo always shows current activity, and tests can pin the reference date
//! to assert exact output.

use crate::{
    entities::{Booking, BookingStatus, Venue, VenueCategory, VenueStatus},
    errors::{Error, Result},
};
use chrono::{Days, NaiveDate};

/// Identity of the demo customer whose bookings the seed revolves around.
pub const DEMO_CUSTOMER: &str = "Pavan";

/// Fallback label for bookings whose venue id has no match.
pub const UNKNOWN_VENUE: &str = "Unknown Venue";

/// In-memory venue and booking collections. Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    venues: Vec<Venue>,
    bookings: Vec<Booking>,
}

impl MockStore {
    /// Builds a store from explicit collections.
    #[must_use]
    pub const fn new(venues: Vec<Venue>, bookings: Vec<Booking>) -> Self {
        Self { venues, bookings }
    }

    /// Builds the demo store with bookings placed around `today`.
    #[must_use]
    pub fn seeded(today: NaiveDate) -> Self {
        Self::new(seed_venues(), seed_bookings(today))
    }

    /// All venues in catalogue order.
    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// All bookings in seed order.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Finds a venue by id.
    #[must_use]
    pub fn venue(&self, venue_id: &str) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == venue_id)
    }

    /// Finds a venue by display name, ignoring case.
    ///
    /// # Errors
    /// [`Error::VenueNotFound`] when no venue has that name.
    pub fn venue_by_name(&self, name: &str) -> Result<&Venue> {
        let name = name.trim();
        self.venues
            .iter()
            .find(|venue| venue.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::VenueNotFound {
                id: name.to_string(),
            })
    }

    /// Finds one of `identity`'s bookings by id. Bookings of other
    /// customers are reported as missing.
    ///
    /// # Errors
    /// [`Error::BookingNotFound`] when the id is unknown or not `identity`'s.
    pub fn customer_booking(&self, identity: &str, booking_id: &str) -> Result<&Booking> {
        let booking_id = booking_id.trim();
        self.bookings
            .iter()
            .find(|booking| booking.id == booking_id && booking.customer_name == identity)
            .ok_or_else(|| Error::BookingNotFound {
                id: booking_id.to_string(),
            })
    }

    /// Display name of the venue a booking points at, or [`UNKNOWN_VENUE`].
    #[must_use]
    pub fn venue_name(&self, venue_id: &str) -> &str {
        self.venue(venue_id)
            .map_or(UNKNOWN_VENUE, |venue| venue.name.as_str())
    }
}

#[allow(clippy::too_many_arguments)]
fn venue(
    id: &str,
    name: &str,
    category: VenueCategory,
    capacity: u32,
    hourly_rate: f64,
    status: VenueStatus,
    location: &str,
    description: &str,
    amenities: &[&str],
) -> Venue {
    Venue {
        id: id.to_string(),
        name: name.to_string(),
        category,
        capacity,
        hourly_rate,
        status,
        location: location.to_string(),
        description: description.to_string(),
        amenities: amenities.iter().map(ToString::to_string).collect(),
    }
}

/// The static venue catalogue.
#[must_use]
pub fn seed_venues() -> Vec<Venue> {
    vec![
        venue(
            "v1",
            "Grand Central Hall",
            VenueCategory::Hall,
            500,
            250.0,
            VenueStatus::Available,
            "Main Building, Floor 1",
            "A spacious hall perfect for weddings and conferences with modern lighting.",
            &["Stage", "Sound System", "Projector", "AC"],
        ),
        venue(
            "v2",
            "City Sports Arena",
            VenueCategory::Indoor,
            100,
            80.0,
            VenueStatus::Occupied,
            "Sports Complex",
            "Indoor multi-purpose court suitable for basketball and badminton.",
            &["Changing Rooms", "Scoreboard", "Bleachers"],
        ),
        venue(
            "v3",
            "Sunset Soccer Field",
            VenueCategory::Outdoor,
            200,
            120.0,
            VenueStatus::Maintenance,
            "North Campus",
            "Regulation size soccer field with natural grass.",
            &["Floodlights", "Dugouts"],
        ),
        venue(
            "v4",
            "Olympic Blue Pool",
            VenueCategory::Pool,
            50,
            150.0,
            VenueStatus::Available,
            "Aquatic Center",
            "50m Olympic standard pool with temperature control.",
            &["Lifeguard", "Lane Ropes", "Showers"],
        ),
        venue(
            "v5",
            "Lecture Hall 101",
            VenueCategory::Classroom,
            60,
            40.0,
            VenueStatus::Available,
            "Academic Block A",
            "Modern classroom with tiered seating and smart board.",
            &["WiFi", "Smart Board", "Audio System"],
        ),
        venue(
            "v6",
            "Garden Pavilion",
            VenueCategory::Outdoor,
            150,
            100.0,
            VenueStatus::Available,
            "Botanical Gardens",
            "Open air pavilion surrounded by lush greenery.",
            &["Gazebo", "Power Outlets"],
        ),
    ]
}

/// Shifts `today` by a signed number of days, saturating at the calendar edges.
fn relative_date(today: NaiveDate, offset_days: i64) -> NaiveDate {
    let shifted = if offset_days >= 0 {
        today.checked_add_days(Days::new(offset_days.unsigned_abs()))
    } else {
        today.checked_sub_days(Days::new(offset_days.unsigned_abs()))
    };
    shifted.unwrap_or(today)
}

/// The booking seed, dated relative to `today`.
///
/// Half the bookings belong to [`DEMO_CUSTOMER`]; the rest are other clients
/// so identity filtering has something to discard.
#[must_use]
pub fn seed_bookings(today: NaiveDate) -> Vec<Booking> {
    // (id, venue, customer, offset, hours, status, total)
    let rows: [(&str, &str, &str, i64, u32, BookingStatus, f64); 11] = [
        ("b1", "v1", DEMO_CUSTOMER, -10, 4, BookingStatus::Confirmed, 1000.0),
        ("b2", "v2", "TechStart Inc", -5, 2, BookingStatus::Confirmed, 160.0),
        ("b3", "v4", DEMO_CUSTOMER, 0, 3, BookingStatus::Pending, 450.0),
        ("b4", "v3", "Global Events", 2, 5, BookingStatus::Confirmed, 600.0),
        ("b5", "v5", DEMO_CUSTOMER, 4, 2, BookingStatus::Confirmed, 80.0),
        ("b6", "v6", "Community Group", 4, 4, BookingStatus::Confirmed, 400.0),
        ("b7", "v1", DEMO_CUSTOMER, 12, 6, BookingStatus::Confirmed, 1500.0),
        ("b8", "v2", "Sports Club X", 15, 3, BookingStatus::Confirmed, 240.0),
        ("b9", "v3", DEMO_CUSTOMER, 18, 2, BookingStatus::Pending, 240.0),
        ("b10", "v4", "Swim Team A", 20, 4, BookingStatus::Confirmed, 600.0),
        ("b11", "v1", DEMO_CUSTOMER, 25, 5, BookingStatus::Confirmed, 1250.0),
    ];

    rows.into_iter()
        .map(
            |(id, venue_id, customer, offset, duration_hours, status, total_price)| Booking {
                id: id.to_string(),
                venue_id: venue_id.to_string(),
                customer_name: customer.to_string(),
                date: relative_date(today, offset),
                duration_hours,
                status,
                total_price,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_venue_ids_are_unique() {
        let venues = seed_venues();
        let ids: HashSet<&str> = venues.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids.len(), venues.len());
    }

    #[test]
    fn test_seed_bookings_reference_existing_venues() {
        let store = MockStore::seeded(test_today());
        for booking in store.bookings() {
            assert!(store.venue(&booking.venue_id).is_some(), "{}", booking.id);
        }
    }

    #[test]
    fn test_seed_bookings_are_relative_to_today() {
        let today = test_today();
        let bookings = seed_bookings(today);

        let b1 = bookings.iter().find(|b| b.id == "b1").unwrap();
        assert_eq!(b1.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

        let b3 = bookings.iter().find(|b| b.id == "b3").unwrap();
        assert_eq!(b3.date, today);

        let b11 = bookings.iter().find(|b| b.id == "b11").unwrap();
        assert_eq!(b11.date, NaiveDate::from_ymd_opt(2024, 4, 9).unwrap());
    }

    #[test]
    fn test_seed_crosses_year_boundary() {
        let new_years_eve = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let bookings = seed_bookings(new_years_eve);
        let b5 = bookings.iter().find(|b| b.id == "b5").unwrap();
        assert_eq!(b5.date, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
    }

    #[test]
    fn test_venue_name_falls_back_to_unknown() {
        let store = seeded_store();
        assert_eq!(store.venue_name("v4"), "Olympic Blue Pool");
        assert_eq!(store.venue_name("v99"), UNKNOWN_VENUE);
    }

    #[test]
    fn test_venue_by_name_ignores_case() {
        let store = seeded_store();
        let venue = store.venue_by_name("garden pavilion").unwrap();
        assert_eq!(venue.id, "v6");
        assert!(matches!(
            store.venue_by_name("Nowhere"),
            Err(Error::VenueNotFound { .. })
        ));
    }

    #[test]
    fn test_customer_booking_is_scoped_to_identity() {
        let store = seeded_store();
        assert_eq!(store.customer_booking("Pavan", " b7 ").unwrap().id, "b7");
        // b2 belongs to TechStart Inc
        assert!(matches!(
            store.customer_booking("Pavan", "b2"),
            Err(Error::BookingNotFound { .. })
        ));
        assert!(store.customer_booking("Pavan", "b99").is_err());
    }
}
