//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions for venue names, categories, booking ids and status filters
//! so users never have to remember identifiers.

use crate::{
    bot::BotData,
    core::{booking, booking::StatusFilter},
    entities::VenueCategory,
    errors::Error,
};

/// Discord autocomplete limit
const MAX_SUGGESTIONS: usize = 25;

/// Provides autocomplete suggestions for venue names.
///
/// # Arguments
/// * `ctx` - The poise context containing the venue store
/// * `partial` - The partial string the user has typed so far
///
/// # Returns
/// Venue names containing the partial input, in catalogue order
pub async fn autocomplete_venue_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    ctx.data()
        .store
        .venues()
        .iter()
        .filter(|venue| venue.name.to_lowercase().contains(&partial_lower))
        .map(|venue| venue.name.clone())
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Provides autocomplete suggestions for venue categories, `All` included.
#[allow(clippy::unused_async)]
pub async fn autocomplete_category(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    std::iter::once("all")
        .chain(VenueCategory::ALL.iter().map(|category| category.id()))
        .filter(|id| id.contains(&partial_lower))
        .map(str::to_string)
        .collect()
}

/// Provides autocomplete suggestions for the caller's booking ids.
///
/// Only the bookings of the signed-in customer are suggested; signed-out
/// users get nothing.
pub async fn autocomplete_booking_id(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let data = ctx.data();
    let Some(identity) = data
        .with_session(ctx.author().id, |session| {
            session.identity().map(str::to_string)
        })
        .await
    else {
        return Vec::new();
    };

    let mut mine = booking::filter_by_identity(data.store.bookings(), &identity);
    booking::sort_by_date_desc(&mut mine);
    mine.into_iter()
        .filter(|b| b.id.starts_with(partial.trim()))
        .map(|b| b.id.clone())
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Provides autocomplete suggestions for the bookings status filter.
#[allow(clippy::unused_async)]
pub async fn autocomplete_status(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    StatusFilter::OPTIONS
        .iter()
        .map(|filter| filter.id())
        .filter(|id| id.contains(&partial_lower))
        .map(str::to_string)
        .collect()
}
