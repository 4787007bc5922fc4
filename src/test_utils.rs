//! Shared test utilities for `VenueMaster`.
//!
//! Fixed dates and small builders so tests never depend on the real clock.

#![allow(clippy::unwrap_used)]

use crate::{
    core::store::MockStore,
    entities::{Booking, BookingStatus},
};
use chrono::NaiveDate;

/// The "today" every test runs against: Friday 2024-03-15.
pub fn test_today() -> NaiveDate {
    ymd(2024, 3, 15)
}

/// Shorthand for a valid calendar date.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Creates a booking with sensible defaults.
///
/// # Defaults
/// * `venue_id`: `"v1"`
/// * `duration_hours`: 4
pub fn booking(
    id: &str,
    customer: &str,
    date: NaiveDate,
    status: BookingStatus,
    total_price: f64,
) -> Booking {
    Booking {
        id: id.to_string(),
        venue_id: "v1".to_string(),
        customer_name: customer.to_string(),
        date,
        duration_hours: 4,
        status,
        total_price,
    }
}

/// The demo data set seeded relative to [`test_today`].
pub fn seeded_store() -> MockStore {
    MockStore::seeded(test_today())
}
