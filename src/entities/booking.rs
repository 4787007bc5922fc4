//! Booking entity - a reservation of a venue by a customer.
//!
//! The customer name doubles as the identity key: the signed-in user only
//! ever sees bookings whose `customer_name` matches theirs exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Accepted by the venue
    Confirmed,
    /// Awaiting confirmation
    Pending,
    /// Called off
    Cancelled,
}

impl BookingStatus {
    /// Lowercase identifier (`"confirmed"`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }

    /// Capitalised label for filter menus
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Coloured dot used for calendar pills and indicators
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Confirmed => "🟢",
            Self::Pending => "🟡",
            Self::Cancelled => "🔴",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A venue reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier (e.g. `"b3"`)
    pub id: String,
    /// Id of the booked venue. Not checked against the venue list.
    pub venue_id: String,
    /// Customer name, used as the identity key
    pub customer_name: String,
    /// Event date
    pub date: NaiveDate,
    /// Length of the booking in whole hours
    pub duration_hours: u32,
    /// Current status
    pub status: BookingStatus,
    /// Total price in rupees
    pub total_price: f64,
}
