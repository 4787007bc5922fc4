//! Venue browsing business logic.
//!
//! Search and category filtering for the venue lists, the details lookup,
//! and the small formatting helpers the venue cards need.

use crate::entities::{Venue, VenueCategory};

/// Hours used for the "estimated total" on the details card.
pub const ESTIMATE_HOURS: u32 = 4;

/// Amenities shown on a venue card before collapsing into `+N`.
pub const AMENITY_PREVIEW: usize = 3;

/// Category selector of the dashboard search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category
    #[default]
    All,
    /// One category
    Only(VenueCategory),
}

impl CategoryFilter {
    /// Parses `"All"` or a category id/label, ignoring case.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        VenueCategory::from_id(value).map(Self::Only)
    }

    fn matches(self, venue: &Venue) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => venue.category == category,
        }
    }
}

/// Case-insensitive match of `term` against a venue's name or location.
/// An empty term matches everything.
#[must_use]
pub fn matches_search(venue: &Venue, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty()
        || venue.name.to_lowercase().contains(&term)
        || venue.location.to_lowercase().contains(&term)
}

/// Venues passing both the category filter and the text search, in
/// catalogue order.
#[must_use]
pub fn search_venues<'a>(
    venues: &'a [Venue],
    filter: CategoryFilter,
    term: &str,
) -> Vec<&'a Venue> {
    venues
        .iter()
        .filter(|venue| filter.matches(venue) && matches_search(venue, term))
        .collect()
}

/// Venues of one category view, narrowed by `term`.
#[must_use]
pub fn venues_in_category<'a>(
    venues: &'a [Venue],
    category: VenueCategory,
    term: &str,
) -> Vec<&'a Venue> {
    search_venues(venues, CategoryFilter::Only(category), term)
}

/// Heading of a category view.
#[must_use]
pub const fn category_title(category: VenueCategory) -> &'static str {
    match category {
        VenueCategory::Indoor => "Indoor Grounds",
        VenueCategory::Outdoor => "Outdoor Grounds",
        VenueCategory::Hall => "Banquet Halls",
        VenueCategory::Pool => "Swimming Pools",
        VenueCategory::Classroom => "Classrooms & Labs",
    }
}

/// Venue for the details view. An absent or unknown selection falls back to
/// the first venue of the catalogue; `None` only when the catalogue is empty.
#[must_use]
pub fn venue_for_details<'a>(venues: &'a [Venue], selected: Option<&str>) -> Option<&'a Venue> {
    selected
        .and_then(|id| venues.iter().find(|venue| venue.id == id))
        .or_else(|| venues.first())
}

/// First amenities for a card, plus how many were left out.
#[must_use]
pub fn amenity_preview(venue: &Venue) -> (&[String], usize) {
    let shown = venue.amenities.len().min(AMENITY_PREVIEW);
    (
        &venue.amenities[..shown],
        venue.amenities.len() - shown,
    )
}

/// Price of booking `venue` for `hours`.
#[must_use]
pub fn estimate_price(venue: &Venue, hours: u32) -> f64 {
    venue.hourly_rate * f64::from(hours)
}

/// Long-form description used on the details view.
#[must_use]
pub fn long_description(venue: &Venue) -> String {
    let area = venue
        .location
        .split(',')
        .next()
        .map_or(venue.location.as_str(), str::trim);

    format!(
        "Experience the perfect blend of functionality and elegance at {name}. \
         Whether you are organizing a corporate seminar, a casual meet-up, or a grand celebration, \
         our versatile space adapts to your unique needs. Equipped with modern amenities and designed \
         with attention to detail, this venue ensures a seamless experience for you and your guests.\n\n\
         Located in the heart of {area}, it offers easy accessibility and ample parking. \
         The dedicated on-site team is committed to providing exceptional service \
         to make your event truly memorable.",
        name = venue.name,
    )
}
