//! Entity module - the shared shape of venues and bookings.
//! These types carry no behaviour beyond parsing and labelling; all queries
//! over them live in `core`.

pub mod booking;
pub mod venue;

pub use booking::{Booking, BookingStatus};
pub use venue::{Venue, VenueCategory, VenueStatus};
