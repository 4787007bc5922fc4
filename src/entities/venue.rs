//! Venue entity - a bookable physical space.
//!
//! Venues are seeded once at start-up and never mutated. Category and status
//! are closed sets, so they are modelled as enums rather than free strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of space a venue offers. Each category has its own browse view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueCategory {
    /// Indoor courts and grounds
    Indoor,
    /// Open-air fields and pavilions
    Outdoor,
    /// Banquet and conference halls
    Hall,
    /// Swimming pools
    Pool,
    /// Classrooms and lecture halls
    Classroom,
}

impl VenueCategory {
    /// Every category, in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Indoor,
        Self::Outdoor,
        Self::Hall,
        Self::Pool,
        Self::Classroom,
    ];

    /// Identifier used in view routing and config (`"indoor"`, `"pool"`, ...).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
            Self::Hall => "hall",
            Self::Pool => "pool",
            Self::Classroom => "classroom",
        }
    }

    /// Parses a category identifier, case-insensitively.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Emoji shown next to venues of this category.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Indoor => "🏟️",
            Self::Outdoor => "🌳",
            Self::Hall => "🏛️",
            Self::Pool => "🏊",
            Self::Classroom => "🏫",
        }
    }
}

impl fmt::Display for VenueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Operational status of a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueStatus {
    /// Open for bookings
    Available,
    /// Currently in use
    Occupied,
    /// Closed for maintenance
    Maintenance,
}

impl fmt::Display for VenueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        })
    }
}

/// A bookable venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique identifier (e.g. `"v1"`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Category the venue is listed under
    pub category: VenueCategory,
    /// Maximum number of guests
    pub capacity: u32,
    /// Price per hour in rupees
    pub hourly_rate: f64,
    /// Current operational status
    pub status: VenueStatus,
    /// Free-text location, most specific part first (`"Main Building, Floor 1"`)
    pub location: String,
    /// Short marketing description
    pub description: String,
    /// Amenity labels in display order
    pub amenities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_id_round_trips() {
        for category in VenueCategory::ALL {
            assert_eq!(VenueCategory::from_id(category.id()), Some(category));
        }
    }

    #[test]
    fn test_category_from_id_ignores_case_and_whitespace() {
        assert_eq!(VenueCategory::from_id(" Pool "), Some(VenueCategory::Pool));
        assert_eq!(VenueCategory::from_id("HALL"), Some(VenueCategory::Hall));
        assert_eq!(VenueCategory::from_id("garage"), None);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&VenueCategory::Classroom).unwrap_or_default();
        assert_eq!(json, "\"classroom\"");
    }
}
